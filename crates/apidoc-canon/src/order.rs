//! Deterministic ordering of sibling symbols.

use std::borrow::Cow;
use std::cmp::Ordering;

use apidoc_model::{Member, Package, TypeDef, Visibility};

use crate::overrides::erased_params;

/// Something that appears as a sibling in the canonical output.
pub trait ApiItem {
    fn api_name(&self) -> &str;

    /// `None` for symbols without visibility (packages).
    fn api_visibility(&self) -> Option<Visibility>;

    /// Final tie-breaker for items with equal tier and name, e.g. overloads.
    fn api_tiebreak(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

impl ApiItem for Package {
    fn api_name(&self) -> &str {
        &self.name
    }

    fn api_visibility(&self) -> Option<Visibility> {
        None
    }
}

impl ApiItem for TypeDef {
    fn api_name(&self) -> &str {
        &self.name
    }

    fn api_visibility(&self) -> Option<Visibility> {
        Some(self.visibility())
    }
}

impl ApiItem for Member {
    fn api_name(&self) -> &str {
        self.name()
    }

    fn api_visibility(&self) -> Option<Visibility> {
        Some(self.decl().visibility())
    }

    fn api_tiebreak(&self) -> Cow<'_, str> {
        Cow::Owned(erased_params(self.params()))
    }
}

fn tier(visibility: Visibility) -> u8 {
    match visibility {
        Visibility::Public => 0,
        Visibility::Protected => 1,
        Visibility::Package | Visibility::Private => 2,
    }
}

/// Public before protected before everything else, then case-sensitive name.
pub fn api_order<T: ApiItem + ?Sized>(a: &T, b: &T) -> Ordering {
    let by_tier = match (a.api_visibility(), b.api_visibility()) {
        (Some(va), Some(vb)) => tier(va).cmp(&tier(vb)),
        _ => Ordering::Equal,
    };
    by_tier
        .then_with(|| a.api_name().cmp(b.api_name()))
        .then_with(|| a.api_tiebreak().cmp(&b.api_tiebreak()))
}

/// Returns `items` in canonical order. The sort is stable.
pub fn sorted<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: ApiItem + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut items: Vec<&T> = items.into_iter().collect();
    items.sort_by(|a, b| api_order(*a, *b));
    items
}
