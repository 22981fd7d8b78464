use leptos::prelude::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
  view! {
    <div class="flex flex-col min-h-screen">
      <div class="flex flex-col flex-grow w-full">
        <div class="sm:container sm:mx-auto">
          <div class="flex flex-col flex-grow px-0 w-full lg:px-6">{children()}</div>
        </div>
      </div>
    </div>
  }
}
