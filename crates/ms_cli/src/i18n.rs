//! Localized labels for rendered solutions.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Hi,
    Es,
    Fr,
    Ar,
}

impl Language {
    /// Parse a language code; unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "hi" => Language::Hi,
            "es" => Language::Es,
            "fr" => Language::Fr,
            "ar" => Language::Ar,
            _ => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::En => &EN,
            Language::Hi => &HI,
            Language::Es => &ES,
            Language::Fr => &FR,
            Language::Ar => &AR,
        }
    }
}

#[derive(Debug)]
pub struct Labels {
    pub ready: &'static str,
    pub solved: &'static str,
    pub unable: &'static str,
    pub answer: &'static str,
    pub exported: &'static str,
}

static EN: Labels = Labels {
    ready: "Your solution will appear here",
    solved: "Solved in simple steps",
    unable: "I could not understand this fully. Try a clearer maths expression.",
    answer: "Final Answer",
    exported: "Solution saved to",
};

static HI: Labels = Labels {
    ready: "आपका समाधान यहाँ दिखेगा",
    solved: "सरल चरणों में हल",
    unable: "मैं इसे पूरी तरह समझ नहीं पाया। कृपया सवाल साफ लिखें।",
    answer: "अंतिम उत्तर",
    exported: "समाधान सहेजा गया:",
};

static ES: Labels = Labels {
    ready: "Tu solución aparecerá aquí",
    solved: "Resuelto en pasos simples",
    unable: "No pude entenderlo por completo. Escribe una expresión más clara.",
    answer: "Respuesta final",
    exported: "Solución guardada en",
};

static FR: Labels = Labels {
    ready: "Votre solution apparaîtra ici",
    solved: "Résolu en étapes simples",
    unable: "Je n'ai pas bien compris. Essayez une expression plus claire.",
    answer: "Réponse finale",
    exported: "Solution enregistrée dans",
};

static AR: Labels = Labels {
    ready: "سيظهر الحل هنا",
    solved: "تم الحل بخطوات بسيطة",
    unable: "لم أفهم المسألة بالكامل. اكتبها بشكل أوضح.",
    answer: "الإجابة النهائية",
    exported: "تم حفظ الحل في",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert_eq!(Language::from_code("de"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
        assert_eq!(Language::from_code(" FR "), Language::Fr);
    }

    #[test]
    fn codes_round_trip() {
        for lang in [Language::En, Language::Hi, Language::Es, Language::Fr, Language::Ar] {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn labels_are_localized() {
        assert_eq!(Language::En.labels().answer, "Final Answer");
        assert_eq!(Language::Es.labels().answer, "Respuesta final");
        assert_eq!(Language::Hi.labels().answer, "अंतिम उत्तर");
    }
}
