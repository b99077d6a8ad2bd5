// Home page - hero, technology highlights, process flow and call to action
use leptos::prelude::*;
use neurascan_report::components::{ICON_BOOK, ICON_IMAGE, ICON_LIGHTNING, ICON_PULSE, Icon};

const HERO_IMAGE: &str = "https://images.pexels.com/photos/8376168/pexels-photo-8376168.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

struct Step {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

static STEPS: [Step; 4] = [
    Step {
        title: "Upload Scan",
        description: "Upload MRI or CT scan images through our secure interface.",
        icon: ICON_IMAGE,
    },
    Step {
        title: "Image Pre-processing",
        description: "Advanced filtering, normalization, and enhancement techniques are applied.",
        icon: ICON_BOOK,
    },
    Step {
        title: "Segmentation",
        description: "Potential tumor regions are identified through segmentation algorithms.",
        icon: ICON_LIGHTNING,
    },
    Step {
        title: "Analysis & Report",
        description: "Detailed analysis of detected regions with classification results.",
        icon: ICON_PULSE,
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Features />
        <HowItWorks />
        <CallToAction />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative pt-24 pb-32 bg-gradient-to-br from-blue-900 via-blue-800 to-blue-900 text-white overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="md:flex md:items-center md:justify-between">
                    <div class="md:w-1/2">
                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold tracking-tight mb-6 leading-tight">
                            "Advanced Brain Tumor Detection with Digital Image Processing"
                        </h1>
                        <p class="text-xl text-blue-100 mb-8 max-w-2xl">
                            "Leveraging cutting-edge image processing algorithms to detect and analyze brain tumors with high precision."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <a href="/scanner" class="inline-flex items-center justify-center px-6 py-3 text-base font-medium rounded-md bg-white text-blue-700 hover:bg-blue-50 transition-colors">
                                "Try Scanner"
                            </a>
                            <a href="/education" class="inline-flex items-center justify-center px-6 py-3 border border-white text-base font-medium rounded-md text-white hover:bg-blue-800 transition-colors">
                                "Learn More"
                            </a>
                        </div>
                    </div>
                    <div class="hidden md:block md:w-1/2">
                        <div class="relative mt-8 md:mt-0">
                            <div class="absolute inset-0 bg-blue-500 rounded-full blur-3xl opacity-20 animate-pulse"></div>
                            <img
                                src=HERO_IMAGE
                                alt="Brain scan visualization"
                                class="relative rounded-lg shadow-2xl w-full max-w-lg mx-auto"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="py-16 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    title="Advanced Imaging Technology"
                    description="Our platform combines digital image processing with machine learning to provide precise tumor detection."
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <FeatureCard
                        icon=ICON_IMAGE
                        title="Image Preprocessing"
                        description="Advanced filtering techniques to enhance image quality and reduce noise for improved detection accuracy."
                    />
                    <FeatureCard
                        icon=ICON_LIGHTNING
                        title="Segmentation Algorithms"
                        description="Precise identification of tumor regions using advanced segmentation algorithms and contour analysis."
                    />
                    <FeatureCard
                        icon=ICON_PULSE
                        title="Feature Extraction"
                        description="Extraction of relevant features such as texture, shape, and intensity to characterize tumor properties."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="bg-blue-50 rounded-xl p-8 transition-all duration-300 hover:shadow-md">
            <div class="w-12 h-12 bg-blue-100 rounded-lg flex items-center justify-center mb-6 text-blue-700">
                <Icon path=icon size="24" />
            </div>
            <h3 class="text-xl font-bold text-gray-900 mb-3">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
fn SectionHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl font-bold text-gray-900 sm:text-4xl">{title}</h2>
            <p class="mt-4 text-xl text-gray-600 max-w-3xl mx-auto">{description}</p>
        </div>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="py-16 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    title="How It Works"
                    description="Our platform utilizes a multi-stage digital image processing pipeline to analyze brain scans."
                />
                <div class="relative">
                    <div class="absolute inset-0 flex items-center" aria-hidden="true">
                        <div class="w-full border-t border-gray-300"></div>
                    </div>
                    <div class="relative flex justify-center">
                        <span class="px-3 bg-gray-50 text-lg font-medium text-gray-900">"Process Flow"</span>
                    </div>
                </div>
                <div class="mt-12 grid grid-cols-1 gap-8 lg:grid-cols-4">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <div class="relative">
                                    <div class="flex items-center justify-center h-16 w-16 rounded-full bg-blue-100 text-blue-700 font-bold text-xl mb-4">
                                        {i + 1}
                                    </div>
                                    <div class="space-y-2">
                                        <div class="flex items-center text-blue-700">
                                            <Icon path=step.icon size="24" />
                                            <h3 class="ml-2 text-lg font-medium text-gray-900">{step.title}</h3>
                                        </div>
                                        <p class="text-base text-gray-500">{step.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="bg-blue-700 py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-3xl font-bold text-white sm:text-4xl">
                    "Ready to try our brain tumor detection tool?"
                </h2>
                <p class="mt-4 text-xl text-blue-100 max-w-3xl mx-auto">
                    "Upload your scan images and get detailed analysis reports within minutes."
                </p>
                <div class="mt-8">
                    <a href="/scanner" class="inline-flex items-center justify-center px-8 py-3 text-base font-medium rounded-md text-blue-700 bg-white hover:bg-blue-50 transition-colors">
                        "Try Scanner Now"
                    </a>
                </div>
            </div>
        </section>
    }
}
