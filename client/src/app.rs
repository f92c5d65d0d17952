//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::chat::ChatPage;
use crate::state::{auth::AuthState, chat::ChatState};

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
/// Provides the auth and chat contexts. The widget is served both at the site
/// root and at the legacy `/chat.html` address.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(AuthState::default()));
    provide_context(RwSignal::new(ChatState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/chapter-chat.css"/>
        <Title text="Chapter Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("chat.html") view=ChatPage/>
            </Routes>
        </Router>
    }
}
