//! # 診断メッセージ
//!
//! 読み取りの失敗をホストに伝えるための型。
//! クライアントのエラーは加工せず、そのメッセージを summary に載せる。

use std::fmt;

use serde::Serialize;

use crate::resource_data::ResourceDataError;

/// 診断の重大度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// 診断メッセージ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity:  Severity,
    pub summary:   String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail:    Option<String>,
    /// 問題のある属性名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>) -> Self {
        Self::new(Severity::Error, summary)
    }

    pub fn warning(summary: impl Into<String>) -> Self {
        Self::new(Severity::Warning, summary)
    }

    /// エラーのメッセージをそのまま summary にする
    pub fn from_err(err: &dyn std::error::Error) -> Self {
        Self::error(err.to_string())
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    fn new(severity: Severity, summary: impl Into<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail: None,
            attribute: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.summary)?;
        if let Some(attribute) = &self.attribute {
            write!(f, " (属性: {attribute})")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, "\n  {detail}")?;
        }
        Ok(())
    }
}

impl From<ResourceDataError> for Diagnostic {
    fn from(err: ResourceDataError) -> Self {
        let diagnostic = Diagnostic::from_err(&err);
        match err.attribute() {
            Some(name) => diagnostic.with_attribute(name),
            None => diagnostic,
        }
    }
}

/// 診断メッセージの集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// エラー 1 件からなる診断を作る
    pub fn from_err(err: &dyn std::error::Error) -> Self {
        Self(vec![Diagnostic::from_err(err)])
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl From<ResourceDataError> for Diagnostics {
    fn from(err: ResourceDataError) -> Self {
        Diagnostic::from(err).into()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use split_api::SplitApiError;

    use super::*;

    #[test]
    fn test_from_errはエラーメッセージをそのまま使う() {
        let err = SplitApiError::Network("connection refused".to_string());

        let diagnostics = Diagnostics::from_err(&err);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.has_errors());
        assert_eq!(
            diagnostics.iter().next().unwrap().summary,
            "ネットワークエラー: connection refused"
        );
    }

    #[test]
    fn test_警告だけならhas_errorsはfalse() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::warning("注意"));

        assert!(!diagnostics.has_errors());
        assert!(!diagnostics.is_empty());
    }

    #[test]
    fn test_resource_data_errorは属性名を引き継ぐ() {
        let diagnostic = Diagnostic::from(ResourceDataError::MissingRequired("email".to_string()));

        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.attribute.as_deref(), Some("email"));
    }

    #[test]
    fn test_表示形式() {
        let diagnostic = Diagnostic::error("読み取りに失敗しました")
            .with_attribute("email")
            .with_detail("再試行してください");

        assert_eq!(
            diagnostic.to_string(),
            "Error: 読み取りに失敗しました (属性: email)\n  再試行してください"
        );
    }
}
