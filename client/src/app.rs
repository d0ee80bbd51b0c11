//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::trainer::TrainerPage;
use crate::state::trainer::TrainerState;

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
/// Provides the trainer state context and mounts the single trainer route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let trainer = RwSignal::new(TrainerState::default());
    provide_context(trainer);

    view! {
        <Stylesheet id="leptos" href="/pkg/chessboard-trainer.css"/>
        <Title text="Chessboard Memorization"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TrainerPage/>
            </Routes>
        </Router>
    }
}
