// About page - project goals, technology stack, research papers
use leptos::prelude::*;
use neurascan_report::components::{
    ICON_BOOK, ICON_CHECK_CIRCLE, ICON_IMAGE, ICON_LIGHTNING, ICON_PULSE, ICON_SQUARES_FOUR, Icon,
};

const CORE_FEATURES: [(&str, &str, &str); 3] = [
    (ICON_IMAGE, "Advanced Image Processing", "State-of-the-art techniques for image enhancement and analysis"),
    (ICON_PULSE, "Tumor Detection", "Accurate identification of potential tumor regions"),
    (ICON_SQUARES_FOUR, "Analysis Reports", "Detailed reports with visualization and recommendations"),
];

static PIPELINE_STACK: [&str; 4] = [
    "Advanced noise reduction algorithms",
    "Contrast enhancement techniques",
    "Region-based segmentation",
    "Feature extraction methods",
];

static CLASSIFIER_STACK: [&str; 4] = [
    "Machine learning models",
    "Statistical analysis",
    "Pattern recognition",
    "Decision support system",
];

struct Paper {
    title: &'static str,
    authors: &'static str,
    journal: &'static str,
    year: u16,
}

static PAPERS: [Paper; 3] = [
    Paper {
        title: "Digital Image Processing Techniques for Brain Tumor Detection",
        authors: "Kumar, S., Patel, R.",
        journal: "Journal of Medical Imaging",
        year: 2024,
    },
    Paper {
        title: "Comparative Analysis of Segmentation Algorithms",
        authors: "Smith, J., Johnson, M.",
        journal: "IEEE Transactions on Medical Imaging",
        year: 2023,
    },
    Paper {
        title: "Feature Extraction Methods in Medical Image Analysis",
        authors: "Williams, A., Brown, K.",
        journal: "Pattern Recognition in Medicine",
        year: 2023,
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="min-h-screen pt-16 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="bg-gradient-to-r from-blue-700 to-blue-900 rounded-xl overflow-hidden shadow-xl mb-12">
                    <div class="px-8 py-12 md:p-12 text-white">
                        <h1 class="text-3xl md:text-4xl font-bold tracking-tight mb-4">"About Our Project"</h1>
                        <p class="text-xl md:text-2xl text-blue-100 max-w-3xl">
                            "Advancing medical imaging through digital image processing techniques"
                        </p>
                    </div>
                </div>

                <AboutSection icon=ICON_CHECK_CIRCLE title="Core Features">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {CORE_FEATURES
                            .into_iter()
                            .map(|(icon, title, description)| {
                                view! {
                                    <div class="bg-gray-50 rounded-lg p-6">
                                        <div class="flex items-center mb-4 text-blue-600">
                                            <Icon path=icon size="24" />
                                            <h3 class="ml-3 text-lg font-semibold text-gray-900">{title}</h3>
                                        </div>
                                        <p class="text-gray-600">{description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </AboutSection>

                <AboutSection icon=ICON_LIGHTNING title="Technology Stack">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <StackList title="Image Processing Pipeline" items=&PIPELINE_STACK />
                        <StackList title="Classification System" items=&CLASSIFIER_STACK />
                    </div>
                </AboutSection>

                <AboutSection icon=ICON_BOOK title="Research Papers">
                    <div class="space-y-6">
                        {PAPERS
                            .iter()
                            .map(|paper| {
                                view! {
                                    <article class="bg-gray-50 p-6 rounded-lg hover:bg-blue-50 transition-colors">
                                        <h3 class="font-semibold text-gray-900">{paper.title}</h3>
                                        <p class="text-gray-600 mt-2">{paper.authors}</p>
                                        <p class="text-sm text-gray-500 mt-1">
                                            {format!("{}, {}", paper.journal, paper.year)}
                                        </p>
                                        <button type="button" class="mt-3 text-blue-600 text-sm hover:text-blue-800">
                                            "Read Paper →"
                                        </button>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </AboutSection>
            </div>
        </div>
    }
}

#[component]
fn AboutSection(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow-sm p-8 mb-8">
            <h2 class="text-2xl font-bold text-gray-900 mb-6 flex items-center">
                <span class="mr-3 text-blue-600">
                    <Icon path=icon size="24" />
                </span>
                {title}
            </h2>
            {children()}
        </section>
    }
}

#[component]
fn StackList(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="bg-gray-50 p-6 rounded-lg">
            <h3 class="font-semibold text-gray-900 mb-4">{title}</h3>
            <ul class="space-y-3">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-center">
                                <div class="h-2 w-2 bg-blue-600 rounded-full mr-3"></div>
                                <span>{*item}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
