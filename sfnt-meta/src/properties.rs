//! The result of decoding a font.

use indexmap::IndexMap;
use sfnt_types::{Fixed, NameId, Tag};

use crate::{directory::TableDirectory, fallback};

/// Strings keyed by BCP-47 locale tag, in the order they were decoded.
///
/// When a later record has the same locale as an earlier one, its value
/// replaces the earlier value but the entry keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocalizedStrings(IndexMap<String, String>);

impl LocalizedStrings {
    /// The string for exactly this locale tag.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// The string that best matches `locale`, or an empty string if there
    /// are no strings at all.
    ///
    /// See [`fallback::best_match`] for the order in which candidates are
    /// tried.
    pub fn lookup(&self, locale: &str) -> &str {
        fallback::best_match(&self.0, locale)
    }

    /// Iterate over `(locale, string)` pairs in decode order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over the locale tags in decode order.
    pub fn locales(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, locale: impl Into<String>, value: String) {
        self.0.insert(locale.into(), value);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedStrings {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        LocalizedStrings(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A design-space axis of a variable font.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariationAxis {
    pub(crate) tag: Tag,
    pub(crate) min: Fixed,
    pub(crate) default: Fixed,
    pub(crate) max: Fixed,
    pub(crate) name_id: NameId,
    pub(crate) name: LocalizedStrings,
}

impl VariationAxis {
    /// The axis tag, such as `wght`.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn min(&self) -> Fixed {
        self.min
    }

    pub fn default(&self) -> Fixed {
        self.default
    }

    pub fn max(&self) -> Fixed {
        self.max
    }

    /// The `name` table id of the axis name.
    pub fn name_id(&self) -> NameId {
        self.name_id
    }

    /// The localized axis name; empty if the id has no strings.
    pub fn name(&self) -> &LocalizedStrings {
        &self.name
    }

    pub fn name_for(&self, locale: &str) -> &str {
        self.name.lookup(locale)
    }
}

/// A named instance of a variable font.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariationInstance {
    pub(crate) name_id: NameId,
    pub(crate) coordinates: IndexMap<Tag, f64>,
    pub(crate) postscript_name_id: Option<NameId>,
    pub(crate) name: LocalizedStrings,
    pub(crate) postscript_name: LocalizedStrings,
}

impl VariationInstance {
    /// The `name` table id of the instance name.
    pub fn name_id(&self) -> NameId {
        self.name_id
    }

    /// The position of this instance, keyed by axis tag in axis order.
    pub fn coordinates(&self) -> &IndexMap<Tag, f64> {
        &self.coordinates
    }

    /// The coordinate on the axis with this tag.
    pub fn coordinate(&self, axis: Tag) -> Option<f64> {
        self.coordinates.get(&axis).copied()
    }

    /// The id of the PostScript name, if the `fvar` records carry one.
    pub fn postscript_name_id(&self) -> Option<NameId> {
        self.postscript_name_id
    }

    pub fn name(&self) -> &LocalizedStrings {
        &self.name
    }

    pub fn name_for(&self, locale: &str) -> &str {
        self.name.lookup(locale)
    }

    pub fn postscript_name(&self) -> &LocalizedStrings {
        &self.postscript_name
    }

    pub fn postscript_name_for(&self, locale: &str) -> &str {
        self.postscript_name.lookup(locale)
    }
}

macro_rules! localized_accessors {
    ($( $(#[$meta:meta])* $field:ident, $field_for:ident; )*) => {
        $(
            $(#[$meta])*
            pub fn $field(&self) -> &LocalizedStrings {
                &self.$field
            }

            #[doc = concat!("The best match for `locale` from [`Self::", stringify!($field), "`].")]
            pub fn $field_for(&self, locale: &str) -> &str {
                self.$field.lookup(locale)
            }
        )*
    };
}

/// Everything decoded from one font.
///
/// This is created by [`FontParser::parse`](crate::FontParser::parse) and
/// cannot be modified afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontProperties {
    pub(crate) directory: TableDirectory,
    pub(crate) copyright: LocalizedStrings,
    pub(crate) family: LocalizedStrings,
    pub(crate) subfamily: LocalizedStrings,
    pub(crate) unique_identifier: String,
    pub(crate) full_name: LocalizedStrings,
    pub(crate) version: String,
    pub(crate) postscript_name: LocalizedStrings,
    pub(crate) trademark: LocalizedStrings,
    pub(crate) manufacturer: LocalizedStrings,
    pub(crate) designer: LocalizedStrings,
    pub(crate) description: LocalizedStrings,
    pub(crate) vendor_url: String,
    pub(crate) designer_url: String,
    pub(crate) license_description: LocalizedStrings,
    pub(crate) license_info_url: String,
    pub(crate) preferred_family: LocalizedStrings,
    pub(crate) preferred_subfamily: LocalizedStrings,
    pub(crate) compatible_full_name: LocalizedStrings,
    pub(crate) sample_text: LocalizedStrings,
    pub(crate) wws_family: LocalizedStrings,
    pub(crate) wws_subfamily: LocalizedStrings,
    pub(crate) variations_postscript_name_prefix: LocalizedStrings,
    pub(crate) extra_names: IndexMap<NameId, LocalizedStrings>,
    pub(crate) weight_class: u16,
    pub(crate) width_class: u16,
    pub(crate) variable: bool,
    pub(crate) axes: Vec<VariationAxis>,
    pub(crate) instances: Vec<VariationInstance>,
}

impl FontProperties {
    localized_accessors! {
        /// Copyright notice (name id 0).
        copyright, copyright_for;
        /// Family name (name id 1).
        family, family_for;
        /// Subfamily name (name id 2).
        subfamily, subfamily_for;
        /// Full font name (name id 4).
        full_name, full_name_for;
        /// PostScript name (name id 6).
        postscript_name, postscript_name_for;
        /// Trademark (name id 7).
        trademark, trademark_for;
        /// Manufacturer name (name id 8).
        manufacturer, manufacturer_for;
        /// Designer (name id 9).
        designer, designer_for;
        /// Description (name id 10).
        description, description_for;
        /// License description (name id 13).
        license_description, license_description_for;
        /// Typographic family name (name id 16).
        preferred_family, preferred_family_for;
        /// Typographic subfamily name (name id 17).
        preferred_subfamily, preferred_subfamily_for;
        /// Compatible full name, used on the Macintosh (name id 18).
        compatible_full_name, compatible_full_name_for;
        /// Sample text (name id 19).
        sample_text, sample_text_for;
        /// WWS family name (name id 21).
        wws_family, wws_family_for;
        /// WWS subfamily name (name id 22).
        wws_subfamily, wws_subfamily_for;
        /// Variations PostScript name prefix (name id 25).
        variations_postscript_name_prefix, variations_postscript_name_prefix_for;
    }

    /// Unique font identifier (name id 3); the last record wins.
    pub fn unique_identifier(&self) -> &str {
        &self.unique_identifier
    }

    /// Version string (name id 5); the last record wins.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Vendor URL (name id 11); the last record wins.
    pub fn vendor_url(&self) -> &str {
        &self.vendor_url
    }

    /// Designer URL (name id 12); the first record wins.
    pub fn designer_url(&self) -> &str {
        &self.designer_url
    }

    /// License info URL (name id 14); the last record wins.
    pub fn license_info_url(&self) -> &str {
        &self.license_info_url
    }

    /// The `OS/2` weight class, or 0 if the font has no `OS/2` table.
    pub fn weight_class(&self) -> u16 {
        self.weight_class
    }

    /// The `OS/2` width class, or 0 if the font has no `OS/2` table.
    pub fn width_class(&self) -> u16 {
        self.width_class
    }

    /// `true` if the font has an `fvar` table with at least one axis that
    /// decoded without error.
    pub fn is_variable(&self) -> bool {
        self.variable
    }

    pub fn axes(&self) -> &[VariationAxis] {
        &self.axes
    }

    pub fn instances(&self) -> &[VariationInstance] {
        &self.instances
    }

    /// Strings for font specific name ids (256 to 32767).
    pub fn extra_names(&self) -> &IndexMap<NameId, LocalizedStrings> {
        &self.extra_names
    }

    /// Strings for a single font specific name id.
    pub fn extra_name(&self, name_id: NameId) -> Option<&LocalizedStrings> {
        self.extra_names.get(&name_id)
    }

    /// The tables present in the font.
    pub fn table_directory(&self) -> &TableDirectory {
        &self.directory
    }

    /// The sfnt version the font starts with.
    pub fn sfnt_version(&self) -> u32 {
        self.directory.sfnt_version()
    }

    /// Fill in axis and instance names from the font specific names.
    ///
    /// Ids without strings resolve to an empty set of strings.
    pub(crate) fn link_variation_names(&mut self) {
        let extra_names = &self.extra_names;
        let resolve = |id: NameId| extra_names.get(&id).cloned().unwrap_or_default();
        for axis in &mut self.axes {
            axis.name = resolve(axis.name_id);
        }
        for instance in &mut self.instances {
            instance.name = resolve(instance.name_id);
            instance.postscript_name = instance
                .postscript_name_id
                .map(resolve)
                .unwrap_or_default();
        }
    }

    /// Drop everything decoded from `fvar`.
    pub(crate) fn clear_variations(&mut self) {
        self.variable = false;
        self.axes.clear();
        self.instances.clear();
    }
}
