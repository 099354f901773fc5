//! The built-in capability table.

use super::Extra;

pub(super) const BUILTIN: &[Extra] = &[
    Extra {
        package: "ipywidgets",
        feature: "interactive-manipulation",
        summary: "Interactive Manipulate panels in notebook front ends",
        unlocks: &["Manipulate"],
        backends: &[],
    },
    Extra {
        package: "lxml",
        feature: "html-import",
        summary: "Import of HTML documents",
        unlocks: &["Import"],
        backends: &[],
    },
    Extra {
        package: "psutil",
        feature: "memory-introspection",
        summary: "Live system memory readings",
        unlocks: &["$SystemMemory", "MemoryAvailable"],
        backends: &[],
    },
    Extra {
        package: "pyocr",
        feature: "text-recognition",
        summary: "Optical character recognition for images",
        unlocks: &["TextRecognize"],
        backends: &["tesseract", "cuneiform"],
    },
    Extra {
        package: "scikit-image",
        feature: "image-processing",
        summary: "Image filters and numeric minimization refinements",
        unlocks: &["Image", "FindMinimum"],
        backends: &[],
    },
    Extra {
        package: "unidecode",
        feature: "transliteration",
        summary: "ASCII folding (\\[CapitalADoubleDot] \\[RightArrow] A) behind Transliterate",
        unlocks: &["Transliterate"],
        backends: &[],
    },
    Extra {
        package: "wordcloud",
        feature: "word-clouds",
        summary: "Word cloud rendering",
        unlocks: &["WordCloud"],
        backends: &[],
    },
];
