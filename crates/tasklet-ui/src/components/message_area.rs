use tasklet_core::Notice;
use tasklet_core::notify::IDLE_CLASS;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct MessageAreaProps {
  pub notice: Option<Notice>
}

#[function_component(MessageArea)]
pub fn message_area(
  props: &MessageAreaProps
) -> Html {
  let (class, text, live) =
    match &props.notice {
      | Some(notice) => (
        notice.class(),
        notice.message.clone(),
        Some("assertive")
      ),
      | None => (
        IDLE_CLASS.to_string(),
        String::new(),
        None
      )
    };

  html! {
      <div class={class} role="status" aria-live={live}>
          { text }
      </div>
  }
}
