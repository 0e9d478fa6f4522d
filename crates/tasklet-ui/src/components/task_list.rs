use tasklet_core::render::{
  DELETE_CLASS,
  ROW_ID_ATTR,
  TOGGLE_CLASS,
  TOGGLE_PROXY_CLASS
};
use tasklet_core::{
  ListClick,
  ListIntent,
  TaskRow
};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:      Vec<TaskRow>,
  pub on_action: Callback<ListIntent>
}

fn closest(
  element: &Element,
  selector: &str
) -> Option<Element> {
  element
    .closest(selector)
    .ok()
    .flatten()
}

/// One click listener for the whole
/// list; the target is mapped up to its
/// row to recover the task id.
#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let onclick = {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |event: MouseEvent| {
        let Some(target) = event
          .target()
          .and_then(|target| {
            target
              .dyn_into::<Element>()
              .ok()
          })
        else {
          return;
        };

        let row_id = closest(
          &target, "li"
        )
        .and_then(|row| {
          row.get_attribute(ROW_ID_ATTR)
        });
        let on_proxy = closest(
          &target,
          &format!(
            ".{TOGGLE_PROXY_CLASS}"
          )
        )
        .is_some();

        let classes =
          target.class_list();
        let click = ListClick {
          row_id:    row_id.as_deref(),
          on_toggle: on_proxy
            || classes
              .contains(TOGGLE_CLASS),
          on_delete: classes
            .contains(DELETE_CLASS)
            || closest(
              &target,
              &format!(
                ".{DELETE_CLASS}"
              )
            )
            .is_some()
        };

        if click.suppresses_default() {
          event.prevent_default();
        }

        if let Some(intent) =
          click.intent()
        {
          on_action.emit(intent);
        }
      }
    )
  };

  html! {
      <ul id="todoList" class="list-group" onclick={onclick}>
          {
              for props.rows.iter().cloned().map(|row| {
                  let key = row.key();
                  html! { <TaskListRow key={key} row={row} /> }
              })
          }
      </ul>
  }
}
