//! Fonts shaped like two Source Han Sans releases.
//!
//! The naming, OS/2 and fvar data mirror `SourceHanSansSC-VF.otf` and
//! `SourceHanSansJ-Medium.otf`; there are no glyphs. In both fonts the table
//! data is laid out in a different order from the (tag sorted) directory:
//! `name` comes first in the file and `OS/2` last.

use sfnt_types::{Tag, CFF_SFNT_VERSION};

use crate::{
    fvar::FvarBuilder,
    lcid::{EN_US, JA_JP, NEUTRAL, ZH_CN, ZH_TW},
    name::NameTableBuilder,
    os2::os2,
    sfnt::FontBuilder,
};

const COPYRIGHT: &str =
    "© 2014-2021 Adobe (http://www.adobe.com/), with Reserved Font Name 'Source'.";
const TRADEMARK: &str =
    "Source is a trademark of Adobe in the United States and/or other countries.";
const LICENSE: &str = "This Font Software is licensed under the SIL Open Font License, \
    Version 1.1. This Font Software is distributed on an \"AS IS\" BASIS, WITHOUT \
    WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the SIL Open \
    Font License for the specific language, permissions and limitations governing your \
    use of this Font Software.";
const DESIGNER: &str = "Ryoko NISHIZUKA 西塚涼子 (kana, bopomofo & ideographs); \
    Paul D. Hunt (Latin, Greek & Cyrillic); Sandoll Communications 산돌커뮤니케이션, \
    Soo-young JANG 장수영 & Joo-yeon KANG 강주연 (hangul elements, letters & syllables)";
const VENDOR_URL: &str = "http://www.adobe.com/type/";
const LICENSE_URL: &str = "http://scripts.sil.org/OFL";

/// Weight axis instances: (name, postscript name, weight).
pub const SC_VF_INSTANCES: &[(&str, &str, f64)] = &[
    ("ExtraLight", "SourceHanSansSC-ExtraLight", 250.0),
    ("Light", "SourceHanSansSC-Light", 300.0),
    ("Normal", "SourceHanSansSC-Normal", 350.0),
    ("Regular", "SourceHanSansSC-Regular", 400.0),
    ("Medium", "SourceHanSansSC-Medium", 500.0),
    ("Bold", "SourceHanSansSC-Bold", 700.0),
    ("Heavy", "SourceHanSansSC-Heavy", 900.0),
];

/// The name id of the `wght` axis name.
pub const SC_VF_AXIS_NAME_ID: u16 = 256;

// stand-in for the glyph and metrics tables that precede the naming tables
fn head() -> Vec<u8> {
    let mut head = vec![0u8; 54];
    // version 1.0, magic number
    head[..4].copy_from_slice(&0x00010000u32.to_be_bytes());
    head[12..16].copy_from_slice(&0x5F0F3CF5u32.to_be_bytes());
    head
}

fn common_names(names: NameTableBuilder, lang: u16) -> NameTableBuilder {
    names
        .add_ms(lang, 0, COPYRIGHT)
        .add_ms(lang, 7, TRADEMARK)
        .add_ms(lang, 8, "Adobe")
        .add_ms(lang, 9, DESIGNER)
        .add_ms(lang, 11, VENDOR_URL)
        .add_ms(lang, 12, VENDOR_URL)
        .add_ms(lang, 13, LICENSE)
        .add_ms(lang, 14, LICENSE_URL)
}

/// The `name` table of the SC variable font.
pub fn sc_vf_name() -> Vec<u8> {
    let names = NameTableBuilder::new()
        .add_mac(0, 0, "(c) 2014-2021 Adobe")
        .add_mac(0, 1, "Source Han Sans SC VF")
        .add_mac(0, 2, "Regular")
        .add_mac(0, 4, "Source Han Sans SC VF")
        .add_mac(0, 6, "SourceHanSansSC-VF")
        .add_ms(NEUTRAL, 17, "ExtraLight")
        .add_ms(ZH_TW, 1, "思源黑體 VF")
        .add_ms(ZH_TW, 2, "Regular")
        .add_ms(ZH_TW, 17, "ExtraLight");
    let names = common_names(names, EN_US)
        .add_ms(EN_US, 1, "Source Han Sans SC VF")
        .add_ms(EN_US, 2, "Regular")
        .add_ms(EN_US, 3, "2.004;ADBO;SourceHanSansSC-VF;ADOBE")
        .add_ms(EN_US, 4, "Source Han Sans SC VF")
        .add_ms(EN_US, 5, "Version 2.004;hotconv 1.0.118;makeotfexe 2.5.65603")
        .add_ms(EN_US, 6, "SourceHanSansSC-VF")
        .add_ms(EN_US, 17, "ExtraLight")
        .add_ms(EN_US, 25, "SourceHanSansSC");
    let mut names = names
        .add_ms(ZH_CN, 1, "思源黑体 VF")
        .add_ms(ZH_CN, 2, "Regular")
        .add_ms(ZH_CN, 4, "思源黑体 VF")
        .add_ms(ZH_CN, 17, "ExtraLight")
        .add_ms(EN_US, SC_VF_AXIS_NAME_ID, "Weight");
    let first_instance = SC_VF_AXIS_NAME_ID + 1;
    let first_ps_name = first_instance + SC_VF_INSTANCES.len() as u16;
    for (i, (name, ps_name, _)) in SC_VF_INSTANCES.iter().enumerate() {
        names = names
            .add_ms(EN_US, first_instance + i as u16, name)
            .add_ms(EN_US, first_ps_name + i as u16, ps_name);
    }
    names.build()
}

/// The `fvar` table of the SC variable font.
pub fn sc_vf_fvar() -> Vec<u8> {
    let first_instance = SC_VF_AXIS_NAME_ID + 1;
    let first_ps_name = first_instance + SC_VF_INSTANCES.len() as u16;
    let mut fvar = FvarBuilder::new().add_axis(b"wght", 250.0, 250.0, 900.0, SC_VF_AXIS_NAME_ID);
    for (i, (_, _, weight)) in SC_VF_INSTANCES.iter().enumerate() {
        fvar = fvar.add_instance(
            first_instance + i as u16,
            &[*weight],
            Some(first_ps_name + i as u16),
        );
    }
    fvar.build()
}

/// A font shaped like `SourceHanSansSC-VF.otf`.
pub fn source_han_sans_sc_vf() -> Vec<u8> {
    FontBuilder::new(CFF_SFNT_VERSION)
        .add_table(Tag::new(b"head"), head())
        .add_table(Tag::new(b"name"), sc_vf_name())
        .add_table(Tag::new(b"fvar"), sc_vf_fvar())
        .add_table(Tag::new(b"OS/2"), os2(250, 5))
        .build()
}

/// The `name` table of the Japanese Medium font.
pub fn j_medium_name() -> Vec<u8> {
    let names = NameTableBuilder::new()
        .add_mac(0, 1, "Source Han Sans Medium")
        .add_mac(0, 2, "Regular")
        .add_mac(0, 4, "Source Han Sans Medium")
        .add_mac(0, 6, "SourceHanSans-Medium");
    common_names(names, EN_US)
        .add_ms(EN_US, 1, "Source Han Sans Medium")
        .add_ms(EN_US, 2, "Regular")
        .add_ms(EN_US, 3, "2.004;ADBO;SourceHanSans-Medium;ADOBE")
        .add_ms(EN_US, 4, "Source Han Sans Medium")
        .add_ms(EN_US, 5, "Version 2.004;hotconv 1.0.118;makeotfexe 2.5.65603")
        .add_ms(EN_US, 6, "SourceHanSans-Medium")
        .add_ms(EN_US, 16, "Source Han Sans")
        .add_ms(EN_US, 17, "Medium")
        .add_ms(JA_JP, 1, "源ノ角ゴシック Medium")
        .add_ms(JA_JP, 2, "Regular")
        .add_ms(JA_JP, 4, "源ノ角ゴシック Medium")
        .add_ms(JA_JP, 16, "源ノ角ゴシック")
        .add_ms(JA_JP, 17, "Medium")
        .build()
}

/// A font shaped like `SourceHanSansJ-Medium.otf`.
pub fn source_han_sans_j_medium() -> Vec<u8> {
    FontBuilder::new(CFF_SFNT_VERSION)
        .add_table(Tag::new(b"head"), head())
        .add_table(Tag::new(b"name"), j_medium_name())
        .add_table(Tag::new(b"OS/2"), os2(500, 5))
        .build()
}
