use super::BRAND;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use neurascan_report::components::{ICON_LIST, ICON_PULSE, ICON_X, Icon};

const LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/scanner", "Scanner"),
    ("/education", "Education"),
    ("/about", "About"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let pathname = use_location().pathname;
    let is_active = move |href: &str| pathname.with(|path| path == href);

    // Close the mobile menu after navigating.
    Effect::new(move |_| {
        pathname.track();
        set_menu_open.set(false);
    });

    view! {
        <nav class="fixed top-0 inset-x-0 z-50 bg-white shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <a href="/" class="flex items-center text-blue-700">
                        <Icon path=ICON_PULSE size="32" />
                        <span class="ml-2 text-xl font-bold text-gray-900">{BRAND}</span>
                    </a>
                    <div class="hidden md:flex items-center space-x-8">
                        {LINKS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        class=move || {
                                            if is_active(href) {
                                                "text-blue-700 font-medium border-b-2 border-blue-700 py-5"
                                            } else {
                                                "text-gray-600 hover:text-blue-700 py-5"
                                            }
                                        }
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        type="button"
                        class="md:hidden p-2 text-gray-600 hover:text-blue-700"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <Icon path=ICON_X size="24" /> }.into_any()
                            } else {
                                view! { <Icon path=ICON_LIST size="24" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden border-t border-gray-100 bg-white">
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class=move || {
                                        if is_active(href) {
                                            "block px-4 py-3 text-blue-700 bg-blue-50 font-medium"
                                        } else {
                                            "block px-4 py-3 text-gray-600 hover:bg-gray-50"
                                        }
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
