use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskSummaryProps {
  pub total_label:        String,
  pub left_label:         String,
  pub clear_class:        &'static str,
  pub on_clear_completed:
    Callback<MouseEvent>
}

#[function_component(TaskSummary)]
pub fn task_summary(
  props: &TaskSummaryProps
) -> Html {
  html! {
      <div class="todo-footer">
          <span id="totalTasks">{ props.total_label.clone() }</span>
          <span id="itemsLeft">{ props.left_label.clone() }</span>
          <button id="clearCompletedBtn" class={props.clear_class} onclick={props.on_clear_completed.clone()}>
              { "Clear completed" }
          </button>
      </div>
  }
}
