use anyhow::{Context, Result};

use crate::data_provider::TrainingDataProvider;
use crate::i18n::Trans;
use crate::insight::{boards, InsightVm};
use crate::vdom::html::to_html_opt;

/// Load the insight answer and render its game sample as markup
pub async fn format(provider: &dyn TrainingDataProvider, trans: &Trans) -> Result<String> {
    let answer = provider
        .insight()
        .await
        .context("Failed to load sampled games")?;

    let vm = InsightVm {
        answer: Some(answer),
    };
    Ok(to_html_opt(boards::render(&vm, trans).as_ref()))
}

pub async fn run(provider: &dyn TrainingDataProvider, trans: &Trans) -> Result<()> {
    println!("{}", format(provider, trans).await?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_provider::{FileProvider, FixtureProvider};
    use crate::i18n::Lang;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_format_fixture_games() {
        let html = format(&FixtureProvider, &Trans::new(Lang::En)).await.unwrap();
        assert!(html.starts_with("<div class=\"game-sample box\">"));
        assert_eq!(html.matches("mini-board").count(), 3);
    }

    #[tokio::test]
    async fn test_format_reports_bad_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let provider = FileProvider::new(None, Some(file.path().to_path_buf()));

        let err = format(&provider, &Trans::new(Lang::En)).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load sampled games");
    }
}
