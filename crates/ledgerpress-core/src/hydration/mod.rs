//! Record reconstruction from raw ledger objects
//!
//! A single schema-mapping step per object kind. An object of another kind,
//! or one without a struct field bag, reconstructs as `None`. An object of
//! the right kind with a broken field bag is a `MalformedObject` error.

pub mod events;
pub mod field_bag;

pub use events::{decode_event, event_type_name, EventKind};
pub use field_bag::FieldBag;

use crate::errors::Result;
use crate::ledger::LedgerObject;
use crate::model::{Page, Site, Stats, Template};
use crate::rules::same_address;

/// Struct kinds of the cms program the client reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Site,
    Page,
    Template,
    Registry,
}

impl ObjectKind {
    /// Struct name inside the cms module
    pub fn struct_name(&self) -> &'static str {
        match self {
            ObjectKind::Site => "CMSSite",
            ObjectKind::Page => "Page",
            ObjectKind::Template => "Template",
            ObjectKind::Registry => "CMSRegistry",
        }
    }
}

/// Check if `type_tag` names `<package_id>::cms::<name>`
///
/// Package ids compare by numeric value, so `0x0..0beef` matches `0xbeef`.
pub fn type_matches(type_tag: &str, package_id: &str, name: &str) -> bool {
    let mut parts = type_tag.splitn(3, "::");
    let (Some(pkg), Some(module), Some(struct_name)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    module == crate::config::CMS_MODULE
        && struct_name == name
        && same_address(pkg, package_id)
}

/// Field bag of `object` if it is a `kind` struct of this program
fn bag_for<'a>(
    package_id: &str,
    kind: ObjectKind,
    object: &'a LedgerObject,
) -> Option<FieldBag<'a>> {
    let tag = object.type_tag.as_deref()?;
    if !type_matches(tag, package_id, kind.struct_name()) {
        return None;
    }
    FieldBag::new(&object.object_id, &object.fields)
}

/// # Errors
/// `MalformedObject` when a site lacks a required field.
pub fn hydrate_site(package_id: &str, object: &LedgerObject) -> Result<Option<Site>> {
    let Some(bag) = bag_for(package_id, ObjectKind::Site, object) else {
        return Ok(None);
    };
    Ok(Some(Site {
        id: object.object_id.clone(),
        name: bag.required_str("name")?,
        description: bag.required_str("description")?,
        owner: bag.required_str("owner")?,
        template_id: bag.required_str("template_id")?,
        authors: bag.address_list("authors")?,
        created_at: bag.required_i64("created_at")?,
        updated_at: bag.required_i64("updated_at")?,
        is_active: bag.required_bool("is_active")?,
        deployment_id: bag.optional_str("walrus_site_id")?,
        page_count: bag.nested_u64("pages", "/fields/size")?,
    }))
}

/// # Errors
/// `MalformedObject` when a page lacks a required field.
pub fn hydrate_page(package_id: &str, object: &LedgerObject) -> Result<Option<Page>> {
    let Some(bag) = bag_for(package_id, ObjectKind::Page, object) else {
        return Ok(None);
    };
    Ok(Some(Page {
        id: object.object_id.clone(),
        site_id: bag.required_str("site_id")?,
        title: bag.required_str("title")?,
        slug: bag.required_str("slug")?,
        content_id: bag.required_str("content_blob_id")?,
        author: bag.required_str("author")?,
        created_at: bag.required_i64("created_at")?,
        updated_at: bag.required_i64("updated_at")?,
        is_published: bag.required_bool("is_published")?,
    }))
}

/// # Errors
/// `MalformedObject` when a template lacks a required field.
pub fn hydrate_template(package_id: &str, object: &LedgerObject) -> Result<Option<Template>> {
    let Some(bag) = bag_for(package_id, ObjectKind::Template, object) else {
        return Ok(None);
    };
    Ok(Some(Template {
        id: object.object_id.clone(),
        name: bag.required_str("name")?,
        description: bag.required_str("description")?,
        layout_id: bag.required_str("template_blob_id")?,
        style_id: bag.required_str("css_blob_id")?,
        script_id: bag.optional_str("js_blob_id")?,
        author: bag.required_str("author")?,
        is_public: bag.required_bool("is_public")?,
        created_at: bag.required_i64("created_at")?,
    }))
}

/// Registry counters
///
/// # Errors
/// `MalformedObject` when a counter or the admin address is missing.
pub fn hydrate_stats(package_id: &str, object: &LedgerObject) -> Result<Option<Stats>> {
    let Some(bag) = bag_for(package_id, ObjectKind::Registry, object) else {
        return Ok(None);
    };
    Ok(Some(Stats {
        total_sites: bag.required_u64("total_sites")?,
        total_pages: bag.required_u64("total_pages")?,
        total_templates: bag.required_u64("total_templates")?,
        admin: bag.required_str("admin")?,
    }))
}
