use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen pt-32 text-center">
            <h1 class="text-4xl font-bold text-gray-900">"Page not found"</h1>
            <p class="mt-4 text-gray-600">"The page you are looking for does not exist."</p>
            <a href="/" class="mt-8 inline-block text-blue-600 hover:text-blue-800 font-medium">
                "Back to home"
            </a>
        </div>
    }
}
