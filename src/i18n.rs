//! Translated UI strings
//!
//! Every string a view shows is a [`TransKey`]; the table is a match per
//! language, so a missing translation is a compile error rather than a
//! runtime lookup miss.

use phf::phf_map;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Fr,
}

/// Language codes accepted in configuration
static LANG_CODES: phf::Map<&'static str, Lang> = phf_map! {
    "en" => Lang::En,
    "en-us" => Lang::En,
    "en-gb" => Lang::En,
    "fr" => Lang::Fr,
    "fr-fr" => Lang::Fr,
    "fr-ca" => Lang::Fr,
};

impl Lang {
    /// Resolve a language code (case-insensitive), defaulting to English
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_lowercase().replace('_', "-");
        match LANG_CODES.get(code.as_str()) {
            Some(lang) => *lang,
            None => {
                tracing::debug!("I18N: unknown language code {:?}, using English", code);
                Lang::En
            }
        }
    }
}

/// Keys of every translated string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransKey {
    YourTurn,
    FindTheBestMoveForWhite,
    FindTheBestMoveForBlack,
    BestMove,
    KeepGoing,
    NotTheMove,
    TrySomethingElse,
    Solve,
    ViewTheSolution,
    PuzzleSuccess,
    PuzzleFailed,
    /// `%s` = puzzle id
    PuzzleId,
    /// `%s` = rating
    RatingX,
    ContinueTraining,
    GameSampleTitle,
    /// `%s` = typed move
    YourMove,
}

/// Translator bound to a language
#[derive(Debug, Clone, Copy, Default)]
pub struct Trans {
    lang: Lang,
}

impl Trans {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Text for a key without parameters
    pub fn noarg(&self, key: TransKey) -> &'static str {
        match self.lang {
            Lang::En => en(key),
            Lang::Fr => fr(key),
        }
    }

    /// Text for a key with each `%s` replaced by the next argument
    ///
    /// Extra placeholders are left as-is; extra arguments are ignored.
    pub fn with_args(&self, key: TransKey, args: &[&str]) -> String {
        let template = self.noarg(key);
        let mut out = String::with_capacity(template.len());
        let mut args = args.iter();
        let mut rest = template;
        while let Some(pos) = rest.find("%s") {
            out.push_str(&rest[..pos]);
            match args.next() {
                Some(arg) => out.push_str(arg),
                None => out.push_str("%s"),
            }
            rest = &rest[pos + 2..];
        }
        out.push_str(rest);
        out
    }
}

fn en(key: TransKey) -> &'static str {
    match key {
        TransKey::YourTurn => "Your turn",
        TransKey::FindTheBestMoveForWhite => "Find the best move for white.",
        TransKey::FindTheBestMoveForBlack => "Find the best move for black.",
        TransKey::BestMove => "Best move!",
        TransKey::KeepGoing => "Keep going…",
        TransKey::NotTheMove => "That's not the move!",
        TransKey::TrySomethingElse => "Try something else.",
        TransKey::Solve => "Solve",
        TransKey::ViewTheSolution => "View the solution",
        TransKey::PuzzleSuccess => "Success!",
        TransKey::PuzzleFailed => "Puzzle failed",
        TransKey::PuzzleId => "Puzzle %s",
        TransKey::RatingX => "Rating: %s",
        TransKey::ContinueTraining => "Continue training",
        TransKey::GameSampleTitle => "Some of the games used to generate this insight",
        TransKey::YourMove => "Move: %s",
    }
}

fn fr(key: TransKey) -> &'static str {
    match key {
        TransKey::YourTurn => "À vous de jouer",
        TransKey::FindTheBestMoveForWhite => "Trouvez le meilleur coup pour les blancs.",
        TransKey::FindTheBestMoveForBlack => "Trouvez le meilleur coup pour les noirs.",
        TransKey::BestMove => "Meilleur coup !",
        TransKey::KeepGoing => "Continuez…",
        TransKey::NotTheMove => "Ce n'est pas le bon coup !",
        TransKey::TrySomethingElse => "Essayez autre chose.",
        TransKey::Solve => "Résoudre",
        TransKey::ViewTheSolution => "Voir la solution",
        TransKey::PuzzleSuccess => "Réussi !",
        TransKey::PuzzleFailed => "Problème échoué",
        TransKey::PuzzleId => "Problème %s",
        TransKey::RatingX => "Classement : %s",
        TransKey::ContinueTraining => "Continuer l'entraînement",
        TransKey::GameSampleTitle => "Quelques parties utilisées pour cette analyse",
        TransKey::YourMove => "Coup : %s",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Lang::from_code("en"), Lang::En);
        assert_eq!(Lang::from_code("fr"), Lang::Fr);
        assert_eq!(Lang::from_code("FR_fr"), Lang::Fr);
        assert_eq!(Lang::from_code(" en-GB "), Lang::En);
    }

    #[test]
    fn test_unknown_code_defaults_to_english() {
        assert_eq!(Lang::from_code("xx"), Lang::En);
        assert_eq!(Lang::from_code(""), Lang::En);
    }

    #[test]
    fn test_noarg() {
        let en = Trans::new(Lang::En);
        let fr = Trans::new(Lang::Fr);
        assert_eq!(en.noarg(TransKey::YourTurn), "Your turn");
        assert_eq!(fr.noarg(TransKey::YourTurn), "À vous de jouer");
    }

    #[test]
    fn test_with_args() {
        let trans = Trans::default();
        assert_eq!(trans.with_args(TransKey::PuzzleId, &["abc12"]), "Puzzle abc12");
        assert_eq!(trans.with_args(TransKey::RatingX, &["1500"]), "Rating: 1500");
    }

    #[test]
    fn test_with_args_missing_and_extra() {
        let trans = Trans::default();
        assert_eq!(trans.with_args(TransKey::PuzzleId, &[]), "Puzzle %s");
        assert_eq!(trans.with_args(TransKey::YourTurn, &["x"]), "Your turn");
    }
}
