use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div>
                    <h1 class="text-5xl font-bold">{"404"}</h1>
                    <p class="py-6 text-base-content/70">{"That page doesn't exist."}</p>
                    <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                        {"Back to Home"}
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}
