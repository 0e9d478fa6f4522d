use tasklet_core::TaskRow;
use tasklet_core::render::{
  DELETE_CLASS,
  TOGGLE_CLASS,
  TOGGLE_PROXY_CLASS
};
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row: TaskRow
}

/// Row markup only. Clicks are handled
/// by the enclosing list.
#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let row = &props.row;

  html! {
      <li class={row.row_class()} data-id={row.id.to_string()}>
          <label class="checkbox-container">
              <input
                  type="checkbox"
                  class={classes!(TOGGLE_CLASS, "hidden-checkbox")}
                  checked={row.completed}
              />
              <span class={TOGGLE_PROXY_CLASS}></span>
          </label>
          <span class={row.text_class()}>{ row.text.clone() }</span>
          <button class={DELETE_CLASS} aria-label="Delete task">
              <i class="fas fa-trash"></i>
          </button>
      </li>
  }
}
