use super::BRAND;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use neurascan_report::components::{ICON_ENVELOPE, ICON_PULSE, Icon};

const LINK_CLASS: &str = "text-gray-400 hover:text-white transition-colors";

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-gray-900 text-white">
            <div class="max-w-7xl mx-auto px-4 py-12 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center text-blue-400">
                            <Icon path=ICON_PULSE size="32" />
                            <span class="ml-2 text-xl font-bold text-white">{BRAND}</span>
                        </div>
                        <p class="mt-4 text-sm text-gray-300">
                            "Advanced brain tumor detection powered by digital image processing technology."
                        </p>
                        <div class="flex mt-6 space-x-4">
                            <a href="#" class=LINK_CLASS aria-label="Email">
                                <Icon path=ICON_ENVELOPE />
                            </a>
                        </div>
                    </div>

                    <div>
                        <h3 class="text-sm font-semibold uppercase tracking-wider">"Resources"</h3>
                        <ul class="mt-4 space-y-2">
                            <li><a href="/education" class=LINK_CLASS>"Documentation"</a></li>
                            <li><a href="/about" class=LINK_CLASS>"Research Papers"</a></li>
                            <li><a href="#" class=LINK_CLASS>"API Reference"</a></li>
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-sm font-semibold uppercase tracking-wider">"Support"</h3>
                        <ul class="mt-4 space-y-2">
                            <li><a href="#" class=LINK_CLASS>"Help Center"</a></li>
                            <li><a href="#" class=LINK_CLASS>"Contact Us"</a></li>
                            <li><a href="#" class=LINK_CLASS>"Privacy Policy"</a></li>
                            <li><a href="#" class=LINK_CLASS>"Terms of Service"</a></li>
                        </ul>
                    </div>

                    <Newsletter />
                </div>
                <div class="mt-12 border-t border-gray-800 pt-8">
                    <p class="text-sm text-gray-400 text-center">
                        {format!("© {} {}. All rights reserved.", year, BRAND)}
                    </p>
                </div>
            </div>
        </footer>
    }
}

/// Sign-up form. Nothing is sent anywhere.
#[component]
fn Newsletter() -> impl IntoView {
    view! {
        <div>
            <h3 class="text-sm font-semibold uppercase tracking-wider">"Newsletter"</h3>
            <p class="mt-4 text-sm text-gray-300">
                "Subscribe to our newsletter for the latest updates."
            </p>
            <form class="mt-4" on:submit=move |ev: SubmitEvent| ev.prevent_default()>
                <div class="flex flex-col sm:flex-row sm:max-w-md">
                    <input
                        type="email"
                        required=true
                        placeholder="Enter your email"
                        class="px-4 py-2 text-gray-900 placeholder-gray-500 bg-white border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                    <button
                        type="submit"
                        class="mt-2 sm:mt-0 sm:ml-2 px-4 py-2 bg-blue-600 text-white font-medium rounded-md hover:bg-blue-700"
                    >
                        "Subscribe"
                    </button>
                </div>
            </form>
        </div>
    }
}
