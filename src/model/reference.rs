//! Reference type definitions and citation rendering
//!
//! Each reference kind declares an ordered list of fields (with example
//! defaults taken from real Russian bibliography entries) and renders into
//! one of two citation string formats.

use super::field::{Field, FieldValue, RawValue, ValueKind};
use super::validate::{ValidationError, ValidatorKind};

/// Placeholder returned for the one style/kind combination that has no
/// citation format yet; shown to the user as-is
const SUBSCRIPT_UNSUPPORTED: &str = "Пока не поддерживается :)";

/// Citation style selected for a composed reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CitationStyle {
    /// End-of-text citation: the year follows the author in parentheses
    #[default]
    Transtextual,
    /// Footnote citation: the year moves next to the publisher
    Subscript,
}

/// The six supported reference kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Monography,
    CollectionArticle,
    JournalArticle,
    TextMultivolume,
    DigitalLegalAct,
    DigitalArticle,
}

impl ReferenceKind {
    /// All kinds, in catalog order
    pub const ALL: [ReferenceKind; 6] = [
        ReferenceKind::Monography,
        ReferenceKind::CollectionArticle,
        ReferenceKind::JournalArticle,
        ReferenceKind::TextMultivolume,
        ReferenceKind::DigitalLegalAct,
        ReferenceKind::DigitalArticle,
    ];

    /// Human-readable type name shown in the selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Monography => "Монография",
            Self::CollectionArticle => "Статья в сборнике",
            Self::JournalArticle => "Статья в журнале",
            Self::TextMultivolume => "Текст, опубликованный в многотомном издании",
            Self::DigitalLegalAct => "Нормативно-правовой акт, электронный ресурс",
            Self::DigitalArticle => "Online-статья",
        }
    }

    /// Field declarations, in prompt and interpolation order
    pub fn field_specs(&self) -> &'static [FieldSpec] {
        match self {
            Self::Monography => MONOGRAPHY_FIELDS,
            Self::CollectionArticle => COLLECTION_ARTICLE_FIELDS,
            Self::JournalArticle => JOURNAL_ARTICLE_FIELDS,
            Self::TextMultivolume => TEXT_MULTIVOLUME_FIELDS,
            Self::DigitalLegalAct => DIGITAL_LEGAL_ACT_FIELDS,
            Self::DigitalArticle => DIGITAL_ARTICLE_FIELDS,
        }
    }
}

/// Default value seeded into a fresh field
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    Text(&'static str),
    Number(i64),
    /// Today's date, resolved at instantiation
    Today,
}

/// Declaration of one field: name, prompt, expected value kind, validator,
/// optionality and the example default it ships with
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub prompt: &'static str,
    pub kind: ValueKind,
    pub validator: ValidatorKind,
    pub optional: bool,
    pub default: DefaultValue,
}

const fn text(name: &'static str, prompt: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        prompt,
        kind: ValueKind::Text,
        validator: ValidatorKind::FreeText,
        optional: false,
        default: DefaultValue::Text(default),
    }
}

const fn text_opt(name: &'static str, prompt: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        prompt,
        kind: ValueKind::Text,
        validator: ValidatorKind::FreeText,
        optional: true,
        default: DefaultValue::Text(default),
    }
}

const fn positive(name: &'static str, prompt: &'static str, default: i64) -> FieldSpec {
    FieldSpec {
        name,
        prompt,
        kind: ValueKind::Number,
        validator: ValidatorKind::PositiveInteger,
        optional: false,
        default: DefaultValue::Number(default),
    }
}

const fn integer_opt(name: &'static str, prompt: &'static str, default: i64) -> FieldSpec {
    FieldSpec {
        name,
        prompt,
        kind: ValueKind::Number,
        validator: ValidatorKind::Integer,
        optional: true,
        default: DefaultValue::Number(default),
    }
}

const fn pages(prompt: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec {
        name: "pages",
        prompt,
        kind: ValueKind::Text,
        validator: ValidatorKind::PageRange,
        optional: true,
        default: DefaultValue::Text(default),
    }
}

const fn request_date(prompt: &'static str, optional: bool) -> FieldSpec {
    FieldSpec {
        name: "request_date",
        prompt,
        kind: ValueKind::Date,
        validator: ValidatorKind::DateText,
        optional,
        default: DefaultValue::Today,
    }
}

const URL_PROMPT: &str =
    "Введите URL (опционально - отображается только если еще введена дата обращения)";
const PAGES_RANGE_PROMPT: &str = "Введите диапазон страниц (через тире) (опционально)";

const MONOGRAPHY_FIELDS: &[FieldSpec] = &[
    text("author", "Введите автора (-ов)", "Корнелиус Х."),
    positive("year", "Введите год", 1992),
    text(
        "name",
        "Введите название",
        "Выиграть может каждый: Как разрешать конфликты",
    ),
    text_opt(
        "editor",
        "Введите редактора (-ов) (опционально)",
        "Х. Корнелиус, З. Фэйр",
    ),
    text_opt(
        "translator",
        "Введите переводчика (-ов) (опционально)",
        "П. Е. Патрушева",
    ),
    text("city", "Введите город", "М."),
    text("publishing_house", "Введите издательство", "Стрингер"),
    pages(
        "Введите количество страниц/номер страниц (-ы) (опционально)",
        "116",
    ),
    text_opt(
        "url",
        URL_PROMPT,
        "http://www.philosophy.ru/library/bahtin/rable.html#_ftn1",
    ),
    request_date("Введите дату обращения (опционально)", true),
];

const COLLECTION_ARTICLE_FIELDS: &[FieldSpec] = &[
    text("author", "Введите автора (-ов) статьи", "Дмитриев Т. А."),
    positive("year", "Введите год", 2009),
    text("article_name", "Введите название статьи", "Антонио Грамши"),
    text(
        "editor",
        "Введите редактора (-ов) сборника",
        "В. А. Куренной",
    ),
    text(
        "collection_name",
        "Введите название сборника",
        "История и теория интеллигенции и интеллектуалов",
    ),
    text("city", "Введите город", "Москва"),
    text("publishing_house", "Введите издательство", "Наследие Евразии"),
    pages(PAGES_RANGE_PROMPT, "207-228"),
];

const JOURNAL_ARTICLE_FIELDS: &[FieldSpec] = &[
    text("author", "Введите автора (-ов) статьи", "Шлыков П."),
    positive("year", "Введите год", 2011),
    text(
        "article_name",
        "Введите название статьи",
        "Турецкий национализм в XX веке: поиски национальной идентичности",
    ),
    text(
        "journal_name",
        "Введите название журнала",
        "Вопросы национализма",
    ),
    positive("journal_number", "Введите номер журнала", 5),
    pages(PAGES_RANGE_PROMPT, "135-155"),
    text_opt(
        "url",
        URL_PROMPT,
        "https://istina.msu.ru/publications/article/583756/",
    ),
    request_date("Введите дату обращения (опционально)", true),
];

const TEXT_MULTIVOLUME_FIELDS: &[FieldSpec] = &[
    text("author", "Введите автора (-ов) текста", "Добролюбов Н. А."),
    positive("year", "Введите год", 1989),
    text(
        "text_name",
        "Введите название текста",
        "Новый кодекс русской практической мудрости",
    ),
    text(
        "multivolume_author",
        "Введите автора/составителя тома",
        "П. А. Лебедев (Сост.)",
    ),
    text(
        "multivolume_name",
        "Введите название многотомного издания",
        "Антология педагогической мысли России первой половины XIX в. (до реформ 60-х гг.)",
    ),
    text("city", "Введите город", "Москва"),
    text("publishing_house", "Введите издательство", "Педагогика"),
    pages(PAGES_RANGE_PROMPT, "486-498"),
    text(
        "first_publication",
        "Введите информацию о первой публикации",
        "Современник. 1859. № 6",
    ),
];

const DIGITAL_LEGAL_ACT_FIELDS: &[FieldSpec] = &[
    text(
        "name",
        "Введите название",
        "Федеральный закон «О воинской обязанности и военной службе» от 28.03.1998 N 53-ФЗ",
    ),
    text(
        "url",
        "Введите URL",
        "http://www.consultant.ru/document/cons_doc_LAW_18260/fbe9593051ae34e2a8eb27f73b923ffee40296b7/",
    ),
    text_opt("article", "Введите статью", "ч. 1 ст. 24"),
    request_date("Введите дату обращения", false),
];

const DIGITAL_ARTICLE_FIELDS: &[FieldSpec] = &[
    text(
        "author",
        "Введите автора (-ов)",
        "Инна Деготькова, Маргарита Мордовина",
    ),
    positive("year", "Введите год публикации статьи", 2021),
    text(
        "article_name",
        "Введите название статьи",
        "Доходы экспортеров ушли под контроль правительства",
    ),
    text(
        "resource_name",
        "Введите название газеты/портала и т.д.",
        "Газета РБК",
    ),
    integer_opt("article_number", "Введите номер статьи (опционально)", 77),
    text(
        "url",
        "Введите URL",
        "https://www.rbc.ru/newspaper/2022/06/10/62a201e69a79478f6aa4c51c",
    ),
    request_date("Введите дату обращения", false),
];

fn today() -> String {
    chrono::Local::now().format("%d.%m.%Y").to_string()
}

/// A reference instance: a kind, a citation style and its owned fields
#[derive(Debug, Clone)]
pub struct Reference {
    kind: ReferenceKind,
    style: CitationStyle,
    fields: Vec<(&'static str, Field)>,
}

impl Reference {
    /// Fresh instance seeded with the kind's example defaults
    pub fn new(kind: ReferenceKind) -> Self {
        let fields = kind
            .field_specs()
            .iter()
            .map(|spec| {
                let value = match spec.default {
                    DefaultValue::Text(text) => FieldValue::Text(text.to_string()),
                    DefaultValue::Number(number) => FieldValue::Number(number),
                    DefaultValue::Today => FieldValue::Date(today()),
                };
                let field = Field::new(spec.prompt, spec.kind, spec.validator, spec.optional, value);
                (spec.name, field)
            })
            .collect();
        Self {
            kind,
            style: CitationStyle::default(),
            fields,
        }
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    #[allow(dead_code)]
    pub fn style(&self) -> CitationStyle {
        self.style
    }

    pub fn set_style(&mut self, style: CitationStyle) {
        self.style = style;
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field at its declaration index
    pub fn field(&self, index: usize) -> Option<(&'static str, &Field)> {
        self.fields.get(index).map(|(name, field)| (*name, field))
    }

    /// Validate and store a raw value into the field at `index`.
    /// An index beyond the declared fields is a no-op.
    pub fn set_field(&mut self, index: usize, raw: RawValue) -> Result<(), ValidationError> {
        match self.fields.get_mut(index) {
            Some((_, field)) => field.set_value(raw),
            None => Ok(()),
        }
    }

    /// Render the citation string for the current style.
    ///
    /// Pure function of the current field values and style.
    pub fn render(&self) -> String {
        match self.kind {
            ReferenceKind::Monography => self.render_monography(),
            ReferenceKind::CollectionArticle => self.render_collection_article(),
            ReferenceKind::JournalArticle => self.render_journal_article(),
            ReferenceKind::TextMultivolume => self.render_text_multivolume(),
            ReferenceKind::DigitalLegalAct => self.render_digital_legal_act(),
            ReferenceKind::DigitalArticle => self.render_digital_article(),
        }
    }

    fn text(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(field_name, _)| *field_name == name)
            .map(|(_, field)| field.as_text())
            .unwrap_or("")
    }

    fn number(&self, name: &str) -> i64 {
        self.fields
            .iter()
            .find(|(field_name, _)| *field_name == name)
            .map(|(_, field)| field.as_number())
            .unwrap_or(0)
    }

    /// "— С. {pages}." suffix, empty when no pages were given
    fn pages_block(&self) -> String {
        let pages = self.text("pages");
        if pages.is_empty() {
            String::new()
        } else {
            format!("— С. {pages}.")
        }
    }

    /// Electronic-resource block, present only when both the URL and the
    /// request date are non-empty
    fn url_block(&self) -> String {
        let url = self.text("url");
        let date = self.text("request_date");
        if url.is_empty() || date.is_empty() {
            String::new()
        } else {
            format!(" [Электронный ресурс]. URL: {url} (дата обращения: {date})")
        }
    }

    fn render_monography(&self) -> String {
        let author = self.text("author");
        let year = self.number("year");
        let name = self.text("name");
        let editor = self.text("editor");
        let translator = self.text("translator");
        let city = self.text("city");
        let publishing_house = self.text("publishing_house");

        // editor alone: "// editor"; translator alone: "// пер. X";
        // both: "// editor; пер. X"; neither: no "//" block at all
        let semicolon = if editor.is_empty() { "" } else { "; " };
        let translator = if translator.is_empty() {
            String::new()
        } else {
            format!("{semicolon}пер. {translator}")
        };
        let slashes = if editor.is_empty() && translator.is_empty() {
            ""
        } else {
            " // "
        };
        let pages = self.pages_block();
        let url = self.url_block();

        match self.style {
            CitationStyle::Transtextual => format!(
                "{author} ({year}) {name}{slashes}{editor}{translator}. — \
                 {city}: {publishing_house}. {pages}{url}"
            ),
            CitationStyle::Subscript => format!(
                "{author} {name}{slashes}{editor}{translator}. — \
                 {city}: {publishing_house}, {year}. {pages}{url}"
            ),
        }
    }

    fn render_collection_article(&self) -> String {
        let author = self.text("author");
        let year = self.number("year");
        let article_name = self.text("article_name");
        let editor = self.text("editor");
        let collection_name = self.text("collection_name");
        let city = self.text("city");
        let publishing_house = self.text("publishing_house");
        let pages = self.pages_block();

        match self.style {
            CitationStyle::Transtextual => format!(
                "{author} ({year}) {article_name} // {editor} (Ред.). \
                 {collection_name}. {city}: {publishing_house}. {pages}"
            ),
            CitationStyle::Subscript => format!(
                "{author} {article_name} // {editor} (Ред.). \
                 {collection_name}. {city}: {publishing_house}, {year}. {pages}"
            ),
        }
    }

    fn render_journal_article(&self) -> String {
        let author = self.text("author");
        let year = self.number("year");
        let article_name = self.text("article_name");
        let journal_name = self.text("journal_name");
        let journal_number = self.number("journal_number");
        let pages = self.pages_block();
        let url = self.url_block();

        match self.style {
            CitationStyle::Transtextual => format!(
                "{author} ({year}) {article_name} // {journal_name}. \
                 №{journal_number}. {pages}{url}"
            ),
            CitationStyle::Subscript => format!(
                "{author} {article_name} // {journal_name}, {year}. \
                 №{journal_number}. {pages}{url}"
            ),
        }
    }

    fn render_text_multivolume(&self) -> String {
        let author = self.text("author");
        let year = self.number("year");
        let text_name = self.text("text_name");
        let multivolume_author = self.text("multivolume_author");
        let multivolume_name = self.text("multivolume_name");
        let city = self.text("city");
        let publishing_house = self.text("publishing_house");
        let first_publication = self.text("first_publication");
        let pages = self.pages_block();

        match self.style {
            CitationStyle::Transtextual => format!(
                "{author} ({year}) {text_name} // {multivolume_author} \
                 {multivolume_name} {city}: {publishing_house}. {pages} \
                 Первая публикация: {first_publication}."
            ),
            CitationStyle::Subscript => SUBSCRIPT_UNSUPPORTED.to_string(),
        }
    }

    fn render_digital_legal_act(&self) -> String {
        let name = self.text("name");
        let url = self.text("url");
        let article = self.text("article");
        let date = self.text("request_date");

        // Legal acts cite identically in both styles
        let comma = if article.is_empty() { "" } else { ", " };
        format!("{name}{comma}{article} // {url} (дата обращения: {date})")
    }

    fn render_digital_article(&self) -> String {
        let author = self.text("author");
        let year = self.number("year");
        let article_name = self.text("article_name");
        let resource_name = self.text("resource_name");
        let article_number = self.number("article_number");
        let url = self.text("url");
        let date = self.text("request_date");

        let article_number = if article_number > 0 {
            format!(" № {article_number}.")
        } else {
            String::new()
        };

        match self.style {
            CitationStyle::Transtextual => format!(
                "{author} ({year}) {article_name} // {resource_name}.\
                 {article_number} URL: {url} (дата обращения: {date})"
            ),
            CitationStyle::Subscript => format!(
                "{author}. {article_name} // {resource_name}. {year}.\
                 {article_number} URL: {url} (дата обращения: {date})"
            ),
        }
    }
}
