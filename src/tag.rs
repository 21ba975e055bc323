// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Dense interned tag identifiers and bitmap tag sets.
//!
//! Tag dispatch is the hottest comparison in tree construction. Every
//! tag name the parsing algorithm mentions is interned to a [`TagId`] at
//! tokenizer emit time; scope checks and the insertion-mode decision
//! table then work on small integers and [`TagSet`] bitmaps instead of
//! strings. Names outside the predefined set map to [`TagId::Other`] and
//! fall back to string comparison where identity matters.

/// Dense identifier for the tags named by the HTML parsing algorithm.
///
/// MathML and SVG names that participate in foreign-content rules
/// (integration points, the special set) are included; namespace
/// disambiguation is the caller's job since ids are derived from the
/// lowercased name alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TagId {
    A,
    Address,
    AnnotationXml,
    Applet,
    Area,
    Article,
    Aside,
    B,
    Base,
    Basefont,
    Bgsound,
    Big,
    Blockquote,
    Body,
    Br,
    Button,
    Caption,
    Center,
    Code,
    Col,
    Colgroup,
    Dd,
    Desc,
    Details,
    Dialog,
    Dir,
    Div,
    Dl,
    Dt,
    Em,
    Embed,
    Fieldset,
    Figcaption,
    Figure,
    Font,
    Footer,
    ForeignObject,
    Form,
    Frame,
    Frameset,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Head,
    Header,
    Hgroup,
    Hr,
    Html,
    I,
    Iframe,
    Image,
    Img,
    Input,
    Keygen,
    Li,
    Link,
    Listing,
    Main,
    Malignmark,
    Marquee,
    Math,
    Menu,
    Meta,
    Mglyph,
    Mi,
    Mn,
    Mo,
    Ms,
    Mtext,
    Nav,
    Nobr,
    Noembed,
    Noframes,
    Noscript,
    Object,
    Ol,
    Optgroup,
    Option,
    Output,
    P,
    Param,
    Plaintext,
    Pre,
    Rb,
    Rp,
    Rt,
    Rtc,
    Ruby,
    S,
    Script,
    Search,
    Section,
    Select,
    Small,
    Source,
    Span,
    Strike,
    Strong,
    Style,
    Sub,
    Summary,
    Sup,
    Svg,
    Table,
    Tbody,
    Td,
    Template,
    Textarea,
    Tfoot,
    Th,
    Thead,
    Title,
    Tr,
    Track,
    Tt,
    U,
    Ul,
    Var,
    Wbr,
    Xmp,
    /// Any tag name not in the predefined set.
    Other,
}

static BY_NAME: phf::Map<&'static str, TagId> = phf::phf_map! {
    "a" => TagId::A,
    "address" => TagId::Address,
    "annotation-xml" => TagId::AnnotationXml,
    "applet" => TagId::Applet,
    "area" => TagId::Area,
    "article" => TagId::Article,
    "aside" => TagId::Aside,
    "b" => TagId::B,
    "base" => TagId::Base,
    "basefont" => TagId::Basefont,
    "bgsound" => TagId::Bgsound,
    "big" => TagId::Big,
    "blockquote" => TagId::Blockquote,
    "body" => TagId::Body,
    "br" => TagId::Br,
    "button" => TagId::Button,
    "caption" => TagId::Caption,
    "center" => TagId::Center,
    "code" => TagId::Code,
    "col" => TagId::Col,
    "colgroup" => TagId::Colgroup,
    "dd" => TagId::Dd,
    "desc" => TagId::Desc,
    "details" => TagId::Details,
    "dialog" => TagId::Dialog,
    "dir" => TagId::Dir,
    "div" => TagId::Div,
    "dl" => TagId::Dl,
    "dt" => TagId::Dt,
    "em" => TagId::Em,
    "embed" => TagId::Embed,
    "fieldset" => TagId::Fieldset,
    "figcaption" => TagId::Figcaption,
    "figure" => TagId::Figure,
    "font" => TagId::Font,
    "footer" => TagId::Footer,
    "foreignobject" => TagId::ForeignObject,
    "form" => TagId::Form,
    "frame" => TagId::Frame,
    "frameset" => TagId::Frameset,
    "h1" => TagId::H1,
    "h2" => TagId::H2,
    "h3" => TagId::H3,
    "h4" => TagId::H4,
    "h5" => TagId::H5,
    "h6" => TagId::H6,
    "head" => TagId::Head,
    "header" => TagId::Header,
    "hgroup" => TagId::Hgroup,
    "hr" => TagId::Hr,
    "html" => TagId::Html,
    "i" => TagId::I,
    "iframe" => TagId::Iframe,
    "image" => TagId::Image,
    "img" => TagId::Img,
    "input" => TagId::Input,
    "keygen" => TagId::Keygen,
    "li" => TagId::Li,
    "link" => TagId::Link,
    "listing" => TagId::Listing,
    "main" => TagId::Main,
    "malignmark" => TagId::Malignmark,
    "marquee" => TagId::Marquee,
    "math" => TagId::Math,
    "menu" => TagId::Menu,
    "meta" => TagId::Meta,
    "mglyph" => TagId::Mglyph,
    "mi" => TagId::Mi,
    "mn" => TagId::Mn,
    "mo" => TagId::Mo,
    "ms" => TagId::Ms,
    "mtext" => TagId::Mtext,
    "nav" => TagId::Nav,
    "nobr" => TagId::Nobr,
    "noembed" => TagId::Noembed,
    "noframes" => TagId::Noframes,
    "noscript" => TagId::Noscript,
    "object" => TagId::Object,
    "ol" => TagId::Ol,
    "optgroup" => TagId::Optgroup,
    "option" => TagId::Option,
    "output" => TagId::Output,
    "p" => TagId::P,
    "param" => TagId::Param,
    "plaintext" => TagId::Plaintext,
    "pre" => TagId::Pre,
    "rb" => TagId::Rb,
    "rp" => TagId::Rp,
    "rt" => TagId::Rt,
    "rtc" => TagId::Rtc,
    "ruby" => TagId::Ruby,
    "s" => TagId::S,
    "script" => TagId::Script,
    "search" => TagId::Search,
    "section" => TagId::Section,
    "select" => TagId::Select,
    "small" => TagId::Small,
    "source" => TagId::Source,
    "span" => TagId::Span,
    "strike" => TagId::Strike,
    "strong" => TagId::Strong,
    "style" => TagId::Style,
    "sub" => TagId::Sub,
    "summary" => TagId::Summary,
    "sup" => TagId::Sup,
    "svg" => TagId::Svg,
    "table" => TagId::Table,
    "tbody" => TagId::Tbody,
    "td" => TagId::Td,
    "template" => TagId::Template,
    "textarea" => TagId::Textarea,
    "tfoot" => TagId::Tfoot,
    "th" => TagId::Th,
    "thead" => TagId::Thead,
    "title" => TagId::Title,
    "tr" => TagId::Tr,
    "track" => TagId::Track,
    "tt" => TagId::Tt,
    "u" => TagId::U,
    "ul" => TagId::Ul,
    "var" => TagId::Var,
    "wbr" => TagId::Wbr,
    "xmp" => TagId::Xmp,
};

impl TagId {
    /// Intern an already-lowercased tag name.
    #[inline]
    pub fn from_name(name: &str) -> TagId {
        BY_NAME.get(name).copied().unwrap_or(TagId::Other)
    }

    /// Intern a tag name of unknown case.
    pub fn from_name_any_case(name: &str) -> TagId {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            TagId::from_name(&name.to_ascii_lowercase())
        } else {
            TagId::from_name(name)
        }
    }

    /// The canonical (lowercase) tag name; empty for `Other`.
    pub fn name(self) -> &'static str {
        match self {
            TagId::A => "a",
            TagId::Address => "address",
            TagId::AnnotationXml => "annotation-xml",
            TagId::Applet => "applet",
            TagId::Area => "area",
            TagId::Article => "article",
            TagId::Aside => "aside",
            TagId::B => "b",
            TagId::Base => "base",
            TagId::Basefont => "basefont",
            TagId::Bgsound => "bgsound",
            TagId::Big => "big",
            TagId::Blockquote => "blockquote",
            TagId::Body => "body",
            TagId::Br => "br",
            TagId::Button => "button",
            TagId::Caption => "caption",
            TagId::Center => "center",
            TagId::Code => "code",
            TagId::Col => "col",
            TagId::Colgroup => "colgroup",
            TagId::Dd => "dd",
            TagId::Desc => "desc",
            TagId::Details => "details",
            TagId::Dialog => "dialog",
            TagId::Dir => "dir",
            TagId::Div => "div",
            TagId::Dl => "dl",
            TagId::Dt => "dt",
            TagId::Em => "em",
            TagId::Embed => "embed",
            TagId::Fieldset => "fieldset",
            TagId::Figcaption => "figcaption",
            TagId::Figure => "figure",
            TagId::Font => "font",
            TagId::Footer => "footer",
            TagId::ForeignObject => "foreignobject",
            TagId::Form => "form",
            TagId::Frame => "frame",
            TagId::Frameset => "frameset",
            TagId::H1 => "h1",
            TagId::H2 => "h2",
            TagId::H3 => "h3",
            TagId::H4 => "h4",
            TagId::H5 => "h5",
            TagId::H6 => "h6",
            TagId::Head => "head",
            TagId::Header => "header",
            TagId::Hgroup => "hgroup",
            TagId::Hr => "hr",
            TagId::Html => "html",
            TagId::I => "i",
            TagId::Iframe => "iframe",
            TagId::Image => "image",
            TagId::Img => "img",
            TagId::Input => "input",
            TagId::Keygen => "keygen",
            TagId::Li => "li",
            TagId::Link => "link",
            TagId::Listing => "listing",
            TagId::Main => "main",
            TagId::Malignmark => "malignmark",
            TagId::Marquee => "marquee",
            TagId::Math => "math",
            TagId::Menu => "menu",
            TagId::Meta => "meta",
            TagId::Mglyph => "mglyph",
            TagId::Mi => "mi",
            TagId::Mn => "mn",
            TagId::Mo => "mo",
            TagId::Ms => "ms",
            TagId::Mtext => "mtext",
            TagId::Nav => "nav",
            TagId::Nobr => "nobr",
            TagId::Noembed => "noembed",
            TagId::Noframes => "noframes",
            TagId::Noscript => "noscript",
            TagId::Object => "object",
            TagId::Ol => "ol",
            TagId::Optgroup => "optgroup",
            TagId::Option => "option",
            TagId::Output => "output",
            TagId::P => "p",
            TagId::Param => "param",
            TagId::Plaintext => "plaintext",
            TagId::Pre => "pre",
            TagId::Rb => "rb",
            TagId::Rp => "rp",
            TagId::Rt => "rt",
            TagId::Rtc => "rtc",
            TagId::Ruby => "ruby",
            TagId::S => "s",
            TagId::Script => "script",
            TagId::Search => "search",
            TagId::Section => "section",
            TagId::Select => "select",
            TagId::Small => "small",
            TagId::Source => "source",
            TagId::Span => "span",
            TagId::Strike => "strike",
            TagId::Strong => "strong",
            TagId::Style => "style",
            TagId::Sub => "sub",
            TagId::Summary => "summary",
            TagId::Sup => "sup",
            TagId::Svg => "svg",
            TagId::Table => "table",
            TagId::Tbody => "tbody",
            TagId::Td => "td",
            TagId::Template => "template",
            TagId::Textarea => "textarea",
            TagId::Tfoot => "tfoot",
            TagId::Th => "th",
            TagId::Thead => "thead",
            TagId::Title => "title",
            TagId::Tr => "tr",
            TagId::Track => "track",
            TagId::Tt => "tt",
            TagId::U => "u",
            TagId::Ul => "ul",
            TagId::Var => "var",
            TagId::Wbr => "wbr",
            TagId::Xmp => "xmp",
            TagId::Other => "",
        }
    }
}

/// A set of predefined tags, as a bitmap over `TagId`.
///
/// `TagId::Other` is never a member.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TagSet {
    bits: [u64; 3],
}

impl TagSet {
    pub const EMPTY: TagSet = TagSet { bits: [0; 3] };

    pub const fn with(mut self, t: TagId) -> TagSet {
        let i = t as usize;
        self.bits[i >> 6] |= 1 << (i & 63);
        self
    }

    pub const fn without(mut self, t: TagId) -> TagSet {
        let i = t as usize;
        self.bits[i >> 6] &= !(1 << (i & 63));
        self
    }

    pub const fn union(mut self, other: TagSet) -> TagSet {
        self.bits[0] |= other.bits[0];
        self.bits[1] |= other.bits[1];
        self.bits[2] |= other.bits[2];
        self
    }

    #[inline]
    pub fn contains(&self, t: TagId) -> bool {
        if matches!(t, TagId::Other) {
            return false;
        }
        let i = t as usize;
        self.bits[i >> 6] & (1 << (i & 63)) != 0
    }
}

/// Build a [`TagSet`] from `TagId` variant names.
#[macro_export]
macro_rules! tag_set {
    ($($t:ident)*) => {
        $crate::TagSet::EMPTY $( .with($crate::TagId::$t) )*
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn interning_round_trip() {
        assert_eq!(TagId::from_name("table"), TagId::Table);
        assert_eq!(TagId::from_name("annotation-xml"), TagId::AnnotationXml);
        assert_eq!(TagId::from_name("bogus-custom-tag"), TagId::Other);
        assert_eq!(TagId::from_name_any_case("TaBlE"), TagId::Table);
    }

    #[test]
    fn set_membership() {
        const HEADINGS: TagSet = tag_set!(H1 H2 H3 H4 H5 H6);
        assert!(HEADINGS.contains(TagId::H3));
        assert!(!HEADINGS.contains(TagId::P));
        assert!(!HEADINGS.contains(TagId::Other));
        assert!(!HEADINGS.without(TagId::H3).contains(TagId::H3));
        assert!(HEADINGS.union(tag_set!(P)).contains(TagId::P));
    }
}
