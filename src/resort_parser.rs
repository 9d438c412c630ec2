use itertools::Itertools;
use log::debug;
use scraper::{node::Element, ElementRef, Html, Node};

use crate::schema::{Field, ResortName, ResortTables, SnowfallText, Variant};

/// Predicate over the `class` attribute, with its tokens in source order
/// (duplicates kept) joined by a single space.
#[derive(Clone, Copy, Debug)]
pub enum ClassMatch {
    Exact(&'static str),
    Prefix(&'static str),
}

impl ClassMatch {
    pub fn matches(self, element: &Element) -> bool {
        // `Element::classes` sorts and dedups, so read the raw attribute instead.
        let classes = element
            .attr("class")
            .map_or_else(String::new, |x| x.split_whitespace().join(" "));
        match self {
            Self::Exact(expected) => classes == expected,
            Self::Prefix(prefix) => classes.starts_with(prefix),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ElementQuery {
    pub tag: &'static str,
    pub class: ClassMatch,
}

impl ElementQuery {
    pub fn div(class: ClassMatch) -> Self {
        Self { tag: "div", class }
    }

    /// First matching descendant of `root` in document order, excluding `root` itself.
    pub fn find_first<'a>(&self, root: ElementRef<'a>) -> Option<ElementRef<'a>> {
        root.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == self.tag && self.class.matches(e.value()))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldPolicy {
    /// A resort without this field aborts the whole extraction.
    Required,
    /// A resort without this field is left out of this field's table.
    Optional,
}

#[derive(Clone, Debug)]
pub struct FieldSpec {
    pub field: Field,
    /// Tried in order; the first element found is used even if it turns out to have no text.
    pub tiers: Vec<ElementQuery>,
    pub policy: FieldPolicy,
}

impl Variant {
    pub fn fields(self) -> Vec<FieldSpec> {
        use ClassMatch::*;
        match self {
            Variant::Dual => vec![
                FieldSpec {
                    field: Field::Forecast,
                    tiers: vec![ElementQuery::div(Prefix("text "))],
                    policy: FieldPolicy::Required,
                },
                FieldSpec {
                    field: Field::Report,
                    tiers: vec![ElementQuery::div(Prefix("summary-data-value "))],
                    policy: FieldPolicy::Optional,
                },
            ],
            Variant::Tiered => vec![FieldSpec {
                field: Field::Forecast,
                tiers: vec![
                    ElementQuery::div(Exact("text snow")),
                    ElementQuery::div(Exact("text highsnow")),
                    ElementQuery::div(Exact("text nosnow")),
                ],
                policy: FieldPolicy::Required,
            }],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Resort block #{block} has no readable name")]
    MissingName { block: usize },
    #[error("No element for {field:?} was found for resort {resort:?}")]
    MissingField { field: Field, resort: String },
    #[error("The element for {field:?} of resort {resort:?} does not hold a single text")]
    MissingText { field: Field, resort: String },
}

/// Extracts the tables from a page, or returns empty tables when there is no page.
pub fn parse_page(
    content: Option<&str>,
    fields: &[FieldSpec],
) -> Result<ResortTables, ParseError> {
    match content {
        Some(content) => parse(&Html::parse_document(content), fields),
        None => Ok(ResortTables::with_fields(fields.iter().map(|x| x.field))),
    }
}

pub fn parse(html: &Html, fields: &[FieldSpec]) -> Result<ResortTables, ParseError> {
    let mut tables = ResortTables::with_fields(fields.iter().map(|x| x.field));
    let mut blocks = 0;
    for (block, resort) in html.select(selector!("div.compare-sort")).enumerate() {
        blocks += 1;
        let name: ResortName = resort
            .select(selector!("div.title-location"))
            .next()
            .and_then(sole_text)
            .ok_or(ParseError::MissingName { block })?
            .trim()
            .to_owned()
            .into();
        for spec in fields {
            let Some(value) = find_field(resort, &name, spec)? else {
                continue;
            };
            if let Some(table) = tables.get_mut(spec.field) {
                table.insert(name.clone(), value);
            }
        }
    }
    debug!("Parsed {blocks} resort blocks");
    for (field, table) in tables.iter() {
        debug!("{field}: {} resorts", table.len());
    }
    Ok(tables)
}

fn find_field(
    resort: ElementRef,
    name: &ResortName,
    spec: &FieldSpec,
) -> Result<Option<SnowfallText>, ParseError> {
    let found = spec.tiers.iter().find_map(|query| query.find_first(resort));
    let text = found.map(sole_text);
    match (text, spec.policy) {
        (Some(Some(text)), _) => Ok(Some(text.trim().to_owned().into())),
        (_, FieldPolicy::Optional) => Ok(None),
        (None, FieldPolicy::Required) => Err(ParseError::MissingField {
            field: spec.field,
            resort: name.to_string(),
        }),
        (Some(None), FieldPolicy::Required) => Err(ParseError::MissingText {
            field: spec.field,
            resort: name.to_string(),
        }),
    }
}

/// The text of a node whose only child is a text node, looking through
/// chains of single-child elements. Anything else has no text.
fn sole_text(element: ElementRef<'_>) -> Option<&str> {
    let mut children = element.children();
    let child = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match child.value() {
        Node::Text(text) => Some(&**text),
        Node::Element(_) => ElementRef::wrap(child).and_then(sole_text),
        _ => None,
    }
}
