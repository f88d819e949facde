use crate::containers::header::Header;
use crate::routes::MainRoute;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Shared chrome around every routed screen.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <Header current_route={props.current_route.clone()} />
            <main class="flex-grow container mx-auto max-w-5xl p-4">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"© 2025 Store Ratings · Powered by Rust and Yew"}</p>
                </div>
            </footer>
        </div>
    }
}
