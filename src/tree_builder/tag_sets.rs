// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The tag sets the tree construction rules test against, as bitmaps.
//!
//! Scope queries must distinguish namespaces: `svg title` terminates the
//! default scope while `html title` does not. A [`Scope`] therefore
//! carries one [`TagSet`] per namespace; `invert` expresses the select
//! scope, whose terminating set is "everything except two tags".

use crate::tag::{TagId, TagSet};
use crate::tag_set;
use crate::Ns;

#[derive(Copy, Clone, Debug)]
pub(crate) struct Scope {
    pub html: TagSet,
    pub svg: TagSet,
    pub mathml: TagSet,
    pub invert: bool,
}

impl Scope {
    pub(crate) const fn html_only(html: TagSet) -> Scope {
        Scope {
            html,
            svg: TagSet::EMPTY,
            mathml: TagSet::EMPTY,
            invert: false,
        }
    }

    pub(crate) fn contains(&self, ns: Ns, id: TagId) -> bool {
        let hit = match ns {
            Ns::Html => self.html.contains(id),
            Ns::Svg => self.svg.contains(id),
            Ns::MathMl => self.mathml.contains(id),
            _ => false,
        };
        hit != self.invert
    }
}

const SCOPE_BASE: Scope = Scope {
    html: tag_set!(Applet Caption Html Table Td Th Marquee Object Template),
    svg: tag_set!(ForeignObject Desc Title),
    mathml: tag_set!(Mi Mo Mn Ms Mtext AnnotationXml),
    invert: false,
};

/// *has an element in scope*
pub(crate) const DEFAULT_SCOPE: Scope = SCOPE_BASE;

/// *has an element in list item scope*
pub(crate) const LIST_ITEM_SCOPE: Scope = Scope {
    html: SCOPE_BASE.html.union(tag_set!(Ol Ul)),
    ..SCOPE_BASE
};

/// *has an element in button scope*
pub(crate) const BUTTON_SCOPE: Scope = Scope {
    html: SCOPE_BASE.html.union(tag_set!(Button)),
    ..SCOPE_BASE
};

/// *has an element in table scope*
pub(crate) const TABLE_SCOPE: Scope = Scope::html_only(tag_set!(Html Table Template));

/// *has an element in select scope*: everything except these two ends
/// the scope.
pub(crate) const SELECT_SCOPE: Scope = Scope {
    html: tag_set!(Optgroup Option),
    svg: TagSet::EMPTY,
    mathml: TagSet::EMPTY,
    invert: true,
};

/// Elements cleared off the stack before opening table sections.
pub(crate) const TABLE_CONTEXT: TagSet = tag_set!(Table Template Html);

/// Elements cleared off the stack before switching table sections.
pub(crate) const TABLE_BODY_CONTEXT: TagSet = tag_set!(Tbody Tfoot Thead Template Html);

pub(crate) const TABLE_ROW_CONTEXT: TagSet = tag_set!(Tr Template Html);

/// Current-table-context test for pending table character tokens.
pub(crate) const TABLE_OUTER: TagSet = tag_set!(Table Tbody Tfoot Thead Tr);

/// Targets that trigger foster parenting when inserting into them.
pub(crate) const FOSTER_TARGET: TagSet = tag_set!(Table Tbody Tfoot Thead Tr);

/// *generate implied end tags*
pub(crate) const CURSORY_IMPLIED_END: TagSet =
    tag_set!(Dd Dt Li Option Optgroup P Rb Rp Rt Rtc);

/// *generate all implied end tags thoroughly*
pub(crate) const THOROUGH_IMPLIED_END: TagSet = CURSORY_IMPLIED_END
    .union(tag_set!(Caption Colgroup Tbody Td Tfoot Th Thead Tr));

pub(crate) const HEADING: TagSet = tag_set!(H1 H2 H3 H4 H5 H6);

pub(crate) const TD_TH: TagSet = tag_set!(Td Th);

/// Elements allowed to remain open when `</body>` is seen.
pub(crate) const BODY_END_OK: TagSet =
    tag_set!(Dd Dt Li Optgroup Option P Rp Rt Tbody Td Tfoot Th Thead Tr Body Html);

/// The *special* category.
pub(crate) const SPECIAL: Scope = Scope {
    html: tag_set!(Address Applet Area Article Aside Base Basefont Bgsound Blockquote Body Br
        Button Caption Center Col Colgroup Dd Details Dialog Dir Div Dl Dt Embed Fieldset
        Figcaption Figure Footer Form Frame Frameset H1 H2 H3 H4 H5 H6 Head Header Hgroup Hr
        Html Iframe Img Input Keygen Li Link Listing Main Marquee Menu Meta Nav Noembed
        Noframes Noscript Object Ol P Param Plaintext Pre Script Search Section Select Source
        Style Summary Table Tbody Td Template Textarea Tfoot Th Thead Title Tr Track Ul Wbr
        Xmp),
    svg: tag_set!(ForeignObject Desc Title),
    mathml: tag_set!(Mi Mo Mn Ms Mtext AnnotationXml),
    invert: false,
};

/// MathML text integration points.
pub(crate) const MATHML_TEXT_INTEGRATION: TagSet = tag_set!(Mi Mo Mn Ms Mtext);

/// SVG HTML integration points (`annotation-xml` is attribute-dependent
/// and checked separately).
pub(crate) const SVG_HTML_INTEGRATION: TagSet = tag_set!(ForeignObject Desc Title);

/// Start tags that break out of foreign content.
pub(crate) const FOREIGN_BREAKOUT: TagSet = tag_set!(B Big Blockquote Body Br Center Code Dd
    Div Dl Dt Em Embed H1 H2 H3 H4 H5 H6 Head Hr I Img Li Listing Menu Meta Nobr Ol P Pre
    Ruby S Small Span Strong Strike Sub Sup Table Tt U Ul Var);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scopes_respect_namespace() {
        assert!(DEFAULT_SCOPE.contains(Ns::Html, TagId::Table));
        assert!(DEFAULT_SCOPE.contains(Ns::Svg, TagId::Title));
        assert!(!DEFAULT_SCOPE.contains(Ns::Html, TagId::Title));
        assert!(DEFAULT_SCOPE.contains(Ns::MathMl, TagId::Mi));
        assert!(!DEFAULT_SCOPE.contains(Ns::Html, TagId::Mi));
    }

    #[test]
    fn select_scope_is_inverted() {
        assert!(!SELECT_SCOPE.contains(Ns::Html, TagId::Optgroup));
        assert!(!SELECT_SCOPE.contains(Ns::Html, TagId::Option));
        assert!(SELECT_SCOPE.contains(Ns::Html, TagId::Div));
        assert!(SELECT_SCOPE.contains(Ns::Svg, TagId::Svg));
    }

    #[test]
    fn implied_end_sets_nest() {
        assert!(THOROUGH_IMPLIED_END.contains(TagId::P));
        assert!(THOROUGH_IMPLIED_END.contains(TagId::Td));
        assert!(!CURSORY_IMPLIED_END.contains(TagId::Td));
    }
}
