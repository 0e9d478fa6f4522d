use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::log;
use gloo::timers::callback::Timeout;
use tasklet_core::{
  Controller,
  Filter,
  ListIntent,
  ListView,
  Notice,
  NoticeTicket,
  Outcome
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  UseStateHandle,
  function_component,
  html,
  use_mut_ref,
  use_state
};

use crate::components::{
  FilterBar,
  MessageArea,
  TaskInput,
  TaskList,
  TaskSummary
};
use crate::config::load_config;
use crate::storage::LocalStorage;

type SharedController =
  Rc<RefCell<Controller<LocalStorage>>>;

#[derive(Clone)]
struct AppHandles {
  controller:  SharedController,
  view:        UseStateHandle<ListView>,
  notice:      UseStateHandle<Option<Notice>>,
  draft:       UseStateHandle<String>,
  clear_timer: Rc<RefCell<Option<Timeout>>>
}

impl AppHandles {
  fn apply(
    &self,
    action: &str,
    outcome: Outcome
  ) {
    ui_debug(
      action,
      &format!("{outcome:?}")
    );

    let timeout_ms = {
      let controller =
        self.controller.borrow();
      if outcome.rerender {
        self.view.set(controller.view());
      }
      self.notice.set(
        controller.notice().cloned()
      );
      controller.notice_timeout_ms()
    };

    if outcome.clear_input {
      self.draft.set(String::new());
    }

    if let Some(ticket) = outcome.notice
    {
      self.schedule_clear(
        ticket, timeout_ms
      );
    }
  }

  fn schedule_clear(
    &self,
    ticket: NoticeTicket,
    timeout_ms: u32
  ) {
    let controller =
      self.controller.clone();
    let notice = self.notice.clone();
    let timer =
      Timeout::new(timeout_ms, move || {
        let cleared = controller
          .borrow_mut()
          .expire_notice(ticket);
        if cleared {
          notice.set(None);
        }
      });

    // Dropping the previous handle
    // cancels its pending clear.
    *self.clear_timer.borrow_mut() =
      Some(timer);
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let controller: SharedController =
    use_mut_ref(|| {
      let cfg = load_config();
      Controller::load(
        LocalStorage, &cfg
      )
    });
  let view = {
    let controller = controller.clone();
    use_state(move || {
      controller.borrow().view()
    })
  };
  let notice =
    use_state(|| None::<Notice>);
  let draft = use_state(String::new);
  let clear_timer =
    use_mut_ref(|| None::<Timeout>);

  let handles = AppHandles {
    controller,
    view: view.clone(),
    notice: notice.clone(),
    draft: draft.clone(),
    clear_timer
  };

  let on_draft = {
    let draft = draft.clone();
    Callback::from(move |value: String| {
      draft.set(value)
    })
  };

  let on_add = {
    let handles = handles.clone();
    Callback::from(move |()| {
      let input =
        (*handles.draft).clone();
      let outcome = handles
        .controller
        .borrow_mut()
        .add(&input);
      handles.apply("add", outcome);
    })
  };

  let on_action = {
    let handles = handles.clone();
    Callback::from(
      move |intent: ListIntent| {
        let outcome = handles
          .controller
          .borrow_mut()
          .dispatch(intent);
        handles.apply(
          "list",
          outcome
        );
      }
    )
  };

  let on_filter = {
    let handles = handles.clone();
    Callback::from(
      move |filter: Filter| {
        let outcome = handles
          .controller
          .borrow_mut()
          .set_filter(filter);
        handles.apply(
          "filter",
          outcome
        );
      }
    )
  };

  let on_clear_completed = {
    let handles = handles.clone();
    Callback::from(
      move |_: MouseEvent| {
        let outcome = handles
          .controller
          .borrow_mut()
          .clear_completed();
        handles.apply(
          "clear-completed",
          outcome
        );
      }
    )
  };

  html! {
      <div class="todo-app">
          <h1>{ "Tasks" }</h1>
          <TaskInput
              value={(*draft).clone()}
              on_change={on_draft}
              on_submit={on_add}
          />
          <FilterBar active={view.filter} on_select={on_filter} />
          <TaskList rows={view.rows.clone()} on_action={on_action} />
          <TaskSummary
              total_label={view.total_label.clone()}
              left_label={view.left_label.clone()}
              clear_class={view.clear_button_class()}
              on_clear_completed={on_clear_completed}
          />
          <MessageArea notice={(*notice).clone()} />
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
