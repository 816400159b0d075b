//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::catalog::Category;
use crate::components::navbar::Navbar;
use crate::pages::cart::CartPage;
use crate::pages::category::CategoryPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::auth::AuthState;
use crate::state::cart::CartState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the shared auth and cart stores, provides them via context,
/// starts the one-shot session hydration, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let cart = RwSignal::new(CartState::default());

    provide_context(auth);
    provide_context(cart);

    // Resolve the persisted token against the backend exactly once; guarded
    // routes wait on `auth.loading` until this settles.
    crate::util::session::init_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/pc-parts-shop.css"/>
        <Title text="PC Parts Shop"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route
                    path=StaticSegment("cpus")
                    view=|| view! { <CategoryPage category=Category::Cpus/> }
                />
                <Route
                    path=StaticSegment("gpus")
                    view=|| view! { <CategoryPage category=Category::Gpus/> }
                />
                <Route
                    path=StaticSegment("ram")
                    view=|| view! { <CategoryPage category=Category::Ram/> }
                />
                <Route
                    path=StaticSegment("storage")
                    view=|| view! { <CategoryPage category=Category::Storage/> }
                />
                <Route
                    path=StaticSegment("powersupplies")
                    view=|| view! { <CategoryPage category=Category::PowerSupplies/> }
                />
                <Route path=StaticSegment("cart") view=CartPage/>
            </Routes>
        </Router>
    }
}
