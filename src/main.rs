#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  use actix_files::Files;
  use actix_web::{web, HttpServer};
  use leptos::{config::get_configuration, logging::log};
  use leptos_actix::{generate_route_list, LeptosRoutes};
  use related_posts::{html_template, App};

  let conf = get_configuration(None).map_err(|e| std::io::Error::other(e.to_string()))?;
  let addr = conf.leptos_options.site_addr;
  log!("listening on http://{}", &addr);

  HttpServer::new(move || {
    let routes = generate_route_list(App);
    let leptos_options = &conf.leptos_options;
    let site_root = leptos_options.site_root.clone().to_string();

    actix_web::App::new()
      .service(Files::new("/pkg", format!("{site_root}/pkg")))
      .service(Files::new("/images", format!("{site_root}/images")))
      .leptos_routes(routes, {
        let leptos_options = leptos_options.clone();
        move || html_template(leptos_options.clone())
      })
      .app_data(web::Data::new(leptos_options.to_owned()))
  })
  .bind(&addr)?
  .run()
  .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
  use leptos::mount::mount_to_body;
  use related_posts::App;

  console_error_panic_hook::set_once();
  mount_to_body(App);
}
