// Education page - image processing techniques, resources, pipeline steps
use leptos::prelude::*;
use neurascan_report::components::{
    ICON_BOOK, ICON_IMAGE, ICON_LIGHTNING, ICON_PULSE, ICON_SQUARES_FOUR, Icon,
};

struct Technique {
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    examples: [&'static str; 4],
}

static TECHNIQUES: [Technique; 4] = [
    Technique {
        title: "Image Enhancement",
        icon: ICON_IMAGE,
        description: "Techniques to improve image quality including histogram equalization, contrast stretching, and noise reduction.",
        examples: ["Histogram Equalization", "Gaussian Filtering", "Median Filtering", "Adaptive Thresholding"],
    },
    Technique {
        title: "Segmentation",
        icon: ICON_SQUARES_FOUR,
        description: "Methods to partition images into meaningful regions for tumor detection.",
        examples: ["Region Growing", "Watershed Algorithm", "Active Contours", "Thresholding"],
    },
    Technique {
        title: "Feature Extraction",
        icon: ICON_LIGHTNING,
        description: "Extraction of relevant features from segmented regions for classification.",
        examples: ["Texture Analysis", "Shape Features", "Statistical Features", "GLCM Features"],
    },
    Technique {
        title: "Classification",
        icon: ICON_PULSE,
        description: "Machine learning techniques for tumor classification based on extracted features.",
        examples: ["Support Vector Machines", "Neural Networks", "Random Forests", "K-Nearest Neighbors"],
    },
];

const RESOURCES: [(&str, &str); 3] = [
    ("Video Tutorials", "Step-by-step video guides explaining DIP concepts and implementations"),
    ("Code Examples", "Practical code examples demonstrating various DIP techniques"),
    ("Case Studies", "Real-world applications of DIP in medical imaging"),
];

const PIPELINE: [(&str, &str); 5] = [
    ("Image Acquisition", "Obtaining high-quality MRI or CT scan images in DICOM format"),
    ("Preprocessing", "Enhancing image quality through noise reduction and normalization"),
    ("Segmentation", "Identifying regions of interest using advanced segmentation algorithms"),
    ("Feature Extraction", "Extracting relevant features from segmented regions"),
    ("Classification", "Using machine learning to classify tumor presence and type"),
];

#[component]
pub fn EducationPage() -> impl IntoView {
    view! {
        <div class="min-h-screen pt-16 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="text-center mb-12">
                    <h1 class="text-4xl font-bold text-gray-900 mb-4">
                        "Digital Image Processing in Medical Imaging"
                    </h1>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Learn about the advanced techniques used in our brain tumor detection system"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-16">
                    {TECHNIQUES.iter().map(|technique| view! { <TechniqueCard technique=technique /> }).collect_view()}
                </div>

                <div class="bg-white rounded-xl shadow-sm p-8 mb-16">
                    <h2 class="text-2xl font-bold mb-6">"Interactive Learning Resources"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {RESOURCES
                            .into_iter()
                            .map(|(title, description)| {
                                view! {
                                    <div class="bg-gray-50 rounded-lg p-6 text-center hover:bg-blue-50 transition-colors">
                                        <div class="flex justify-center mb-4 text-blue-600">
                                            <Icon path=ICON_BOOK size="32" />
                                        </div>
                                        <h3 class="font-semibold text-gray-900 mb-2">{title}</h3>
                                        <p class="text-gray-600 text-sm">{description}</p>
                                        <button type="button" class="mt-4 text-blue-600 text-sm font-medium hover:text-blue-800">
                                            "Access Resources →"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="bg-white rounded-xl shadow-sm p-8">
                    <h2 class="text-2xl font-bold mb-6">"Implementation Process"</h2>
                    <ol class="space-y-6">
                        {PIPELINE
                            .into_iter()
                            .enumerate()
                            .map(|(i, (title, description))| {
                                view! {
                                    <li class="flex items-start">
                                        <div class="flex-shrink-0 h-8 w-8 rounded-full bg-blue-100 text-blue-600 flex items-center justify-center font-bold">
                                            {i + 1}
                                        </div>
                                        <div class="ml-4">
                                            <h3 class="font-semibold text-gray-900">{title}</h3>
                                            <p class="text-gray-600">{description}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TechniqueCard(technique: &'static Technique) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm p-6 hover:shadow-md transition-shadow">
            <div class="flex items-center mb-4 text-blue-600">
                <Icon path=technique.icon size="24" />
                <h2 class="text-xl font-semibold ml-3 text-gray-900">{technique.title}</h2>
            </div>
            <p class="text-gray-600 mb-4">{technique.description}</p>
            <div class="grid grid-cols-2 gap-2">
                {technique
                    .examples
                    .iter()
                    .map(|example| {
                        view! {
                            <div class="bg-blue-50 text-blue-700 px-3 py-1 rounded-full text-sm text-center">
                                {*example}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
