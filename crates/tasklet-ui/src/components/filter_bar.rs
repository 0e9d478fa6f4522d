use tasklet_core::Filter;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub active:    Filter,
  pub on_select: Callback<Filter>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let make_button = |filter: Filter| {
    let class = if filter
      == props.active
    {
      "filter-btn active"
    } else {
      "filter-btn"
    };
    let on_select =
      props.on_select.clone();
    html! {
        <button
            class={class}
            data-filter={filter.as_str()}
            onclick={move |_| on_select.emit(filter)}
        >
            { filter.label() }
        </button>
    }
  };

  html! {
      <div class="filters">
          { for Filter::ALL.into_iter().map(make_button) }
      </div>
  }
}
