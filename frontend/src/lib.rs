pub mod api;
pub mod config;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::roulette::RouletteGame;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Roulette,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class={styles::CONTAINER}>
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Roulette => html! { <RouletteGame /> },
       Route::NotFound => html! {
           <div class={styles::NOT_FOUND}>
               <p>{"Página no encontrada"}</p>
               <Link<Route> to={Route::Roulette} classes="mt-4 text-blue-600 dark:text-blue-400">{"Volver a la ruleta"}</Link<Route>>
           </div>
       },
   }
}
