//! Field rules for inbound chapters.
//!
//! Rules run in a fixed order and every failure is collected, but callers
//! only ever surface the first translated message (see [`first_message`]).

use crate::models::chapter::ChapterForm;

pub const NAME_MAX: usize = 255;
pub const TITLE_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    MaxLen(usize),
    Min(i64),
}

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: &'static str,
    pub rule: Rule,
}

impl Violation {
    /// Localized message for the admin UI.
    pub fn translate(&self) -> String {
        let label = field_label(self.field);
        match &self.rule {
            Rule::Required => format!("{label}为必填字段"),
            Rule::MaxLen(max) => format!("{label}长度不能超过{max}个字符"),
            Rule::Min(min) => format!("{label}必须大于或等于{min}"),
        }
    }
}

fn field_label(field: &str) -> &str {
    match field {
        "name" => "名称",
        "title" => "标题",
        "description" => "描述",
        "level" => "等级",
        "sort" => "排序",
        "doc_id" => "所属文档",
        other => other,
    }
}

fn required_text(field: &'static str, value: &str, max: usize) -> Option<Violation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(Violation { field, rule: Rule::Required });
    }
    if trimmed.chars().count() > max {
        return Some(Violation { field, rule: Rule::MaxLen(max) });
    }
    None
}

fn optional_text(field: &'static str, value: &str, max: usize) -> Option<Violation> {
    if value.trim().chars().count() > max {
        return Some(Violation { field, rule: Rule::MaxLen(max) });
    }
    None
}

fn min_value(field: &'static str, value: i64, min: i64) -> Option<Violation> {
    (value < min).then_some(Violation { field, rule: Rule::Min(min) })
}

/// Check a chapter against the rule set, in field order.
pub fn validate_chapter(form: &ChapterForm) -> Result<(), Vec<Violation>> {
    let violations: Vec<Violation> = [
        required_text("name", &form.name, NAME_MAX),
        required_text("title", &form.title, TITLE_MAX),
        optional_text("description", &form.description, DESCRIPTION_MAX),
        min_value("level", form.level, 0),
        min_value("sort", form.sort, 0),
        (form.doc_id <= 0).then_some(Violation { field: "doc_id", rule: Rule::Required }),
    ]
    .into_iter()
    .flatten()
    .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// First non-empty translated message, stopping at the first hit.
pub fn first_message(violations: &[Violation]) -> Option<String> {
    violations
        .iter()
        .map(Violation::translate)
        .find(|msg| !msg.is_empty())
}
