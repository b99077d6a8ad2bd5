// NeuraScan website - Leptos 0.8 CSR

mod pages;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="flex flex-col min-h-screen bg-slate-50">
                <Nav />
                <main class="flex-grow">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/scanner") view=ScannerPage />
                        <Route path=path!("/education") view=EducationPage />
                        <Route path=path!("/about") view=AboutPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
