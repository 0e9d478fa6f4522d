use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskInputProps {
  pub value:     String,
  pub on_change: Callback<String>,
  pub on_submit: Callback<()>
}

#[function_component(TaskInput)]
pub fn task_input(
  props: &TaskInputProps
) -> Html {
  let on_input = {
    let on_change =
      props.on_change.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_change.emit(input.value());
      }
    )
  };

  let on_keypress = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          e.prevent_default();
          on_submit.emit(());
        }
      }
    )
  };

  let on_click = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_submit.emit(())
      }
    )
  };

  html! {
      <div class="input-group">
          <input
              id="newTodoInput"
              type="text"
              placeholder="Add a new task"
              value={props.value.clone()}
              oninput={on_input}
              onkeypress={on_keypress}
          />
          <button id="addTodoBtn" class="btn" onclick={on_click}>{ "Add" }</button>
      </div>
  }
}
