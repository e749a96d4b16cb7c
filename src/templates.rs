use askama::Template;
use text_analytics_client::dto::LanguageCode;

use crate::models::{ResultRecord, SelectOption};
use crate::session::{Flash, UserSession};

pub const EMPTY_INPUT_INFO: &str =
  "Por favor, digite um texto na caixa de entrada para ver os resultados.";

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home<'a> {
  pub text: &'a str,
  pub source_languages: Vec<SelectOption>,
  pub target_languages: Vec<SelectOption>,
  pub summary_types: Vec<SelectOption>,
  pub flash: Option<&'a Flash>,
  pub result: Option<&'a ResultRecord>,
  /// Set when the stored text is blank, in place of a result.
  pub show_empty_info: bool,
  pub empty_input_info: &'static str,
}

impl<'a> Home<'a> {
  pub fn from_session(session: &'a UserSession) -> Self {
    let form = &session.form;
    // the last result is only shown next to the text it was produced from
    let show_empty_info = form.text.trim().is_empty();
    let result = if show_empty_info {
      None
    } else {
      session.result.as_ref()
    };
    Self {
      text: &form.text,
      source_languages: SelectOption::languages(
        &LanguageCode::SOURCES,
        Some(form.source_language.unwrap_or(LanguageCode::English)),
      ),
      target_languages: SelectOption::languages(
        &LanguageCode::TARGETS,
        Some(form.target_language),
      ),
      summary_types: SelectOption::summary_types(form.summary_type),
      flash: session.flash.as_ref(),
      result,
      show_empty_info,
      empty_input_info: EMPTY_INPUT_INFO,
    }
  }
}
