//! Mapping legacy platform language ids to BCP-47 tags.
//!
//! Both the Macintosh and Windows platforms identify the language of a
//! `name` record with a numeric id that predates BCP-47. The tables here are
//! static, sorted by id and searched with a binary search.

/// The tag used when a language id is not recognized.
pub const ROOT: &str = "und";

/// The tag preferred when no better match exists.
pub const DEFAULT: &str = "en-US";

pub const PLATFORM_MACINTOSH: u16 = 1;
pub const PLATFORM_WINDOWS: u16 = 3;

/// Resolve a platform specific language id to a BCP-47 tag.
///
/// Returns [`ROOT`] for unknown platforms or ids.
pub fn resolve(platform_id: u16, language_id: u16) -> &'static str {
    let table = match platform_id {
        PLATFORM_MACINTOSH => MACINTOSH_LANGUAGE_IDS,
        PLATFORM_WINDOWS => WINDOWS_LANGUAGE_IDS,
        _ => return ROOT,
    };
    match table.binary_search_by(|entry| entry.0.cmp(&language_id)) {
        Ok(ix) => table[ix].1,
        Err(_) => ROOT,
    }
}

/// Macintosh language ids, from the `Inside Macintosh: Text` language codes.
#[rustfmt::skip]
const MACINTOSH_LANGUAGE_IDS: &[(u16, &str)] = &[
    (0, "en-US"), // English
    (1, "fr-FR"), // French
    (2, "de-DE"), // German
    (3, "it-IT"), // Italian
    (4, "nl-NL"), // Dutch
    (5, "sv-SE"), // Swedish
    (6, "es-ES"), // Spanish
    (7, "da-DK"), // Danish
    (8, "pt-PT"), // Portuguese
    (9, "nb-NO"), // Norwegian
    (10, "he-IL"), // Hebrew
    (11, "ja-JP"), // Japanese
    (12, "ar-SA"), // Arabic
    (13, "fi-FI"), // Finnish
    (14, "el-GR"), // Greek
    (15, "is-IS"), // Icelandic
    (16, "mt-MT"), // Maltese
    (17, "tr-TR"), // Turkish
    (18, "hr-HR"), // Croatian
    (19, "zh-Hant"), // Chinese Traditional
    (20, "ur-PK"), // Urdu
    (21, "hi-IN"), // Hindi
    (22, "th-TH"), // Thai
    (23, "ko-KR"), // Korean
    (24, "lt-LT"), // Lithuanian
    (25, "pl-PL"), // Polish
    (26, "hu-HU"), // Hungarian
    (27, "et-EE"), // Estonian
    (28, "lv-LV"), // Latvian
    (29, "se-NO"), // Sami
    (30, "fo-FO"), // Faroese
    (32, "ru-RU"), // Russian
    (33, "zh-Hans"), // Chinese Simplified
    (35, "ga-IE"), // Irish Gaelic
    (36, "sq-AL"), // Albanian
    (37, "ro-RO"), // Romanian
    (38, "cs-CZ"), // Czech
    (39, "sk-SK"), // Slovak
    (40, "sl-SI"), // Slovenian
    (41, "yi"), // Yiddish
    (42, "sr-Latn-CS"), // Serbian
    (43, "mk-MK"), // Macedonian
    (44, "bg-BG"), // Bulgarian
    (45, "uk-UA"), // Ukrainian
    (46, "be-BY"), // Byelorussian
    (47, "uz-Latn-UZ"), // Uzbek
    (48, "kk-KZ"), // Kazakh
    (49, "az-Cyrl-AZ"), // Azerbaijani Cyrillic Script
    (50, "az-Arab-AZ"), // Azerbaijani Arabic Script
    (51, "hy-AM"), // Armenian
    (52, "ka-GE"), // Georgian
    (53, "ro-MD"), // Moldavian
    (54, "ky-KG"), // Kirghiz
    (55, "tg-Cyrl-TJ"), // Tajiki
    (56, "tk-TM"), // Turkmen
    (57, "mn-Mong-CN"), // Mongolian Mongolian Script
    (58, "mn-MN"), // Mongolian Cyrillic Script
    (59, "ps-AF"), // Pashto
    (61, "ks-Arab-IN"), // Kashmiri
    (62, "sd-IN"), // Sindhi
    (63, "bo-CN"), // Tibetan
    (64, "ne-NP"), // Nepali
    (65, "sa-IN"), // Sanskrit
    (66, "mr-IN"), // Marathi
    (67, "bn-IN"), // Bengali
    (68, "as-IN"), // Assamese
    (69, "gu-IN"), // Gujarati
    (70, "pa-IN"), // Punjabi
    (71, "or-IN"), // Oriya
    (72, "ml-IN"), // Malayalam
    (73, "kn-IN"), // Kannada
    (74, "ta-IN"), // Tamil
    (75, "te-IN"), // Telugu
    (76, "si-LK"), // Sinhalese
    (77, "my-MM"), // Burmese
    (78, "km-KH"), // Khmer
    (79, "lo-LA"), // Lao
    (80, "vi-VN"), // Vietnamese
    (81, "id-ID"), // Indonesian
    (83, "ms-MY"), // Malay Roman Script
    (84, "ms-MY"), // Malay Arabic Script
    (85, "am-ET"), // Amharic
    (86, "ti-ER"), // Tigrinya
    (88, "so-SO"), // Somali
    (89, "sw-KE"), // Swahili
    (128, "cy-GB"), // Welsh
    (129, "eu-ES"), // Basque
    (130, "ca-ES"), // Catalan
    (131, "la"), // Latin
    (132, "quz-PE"), // Quechua
    (133, "gn-PY"), // Guarani
    (135, "tt-RU"), // Tatar
    (136, "ug-Arab-CN"), // Uighur
    (140, "gl-ES"), // Galician
    (141, "af-ZA"), // Afrikaans
    (143, "iu-Cans-CA"), // Inuktitut
    (144, "gd-GB"), // Scottish Gaelic
    (146, "ga-IE"), // Irish Gaelic With Dot Above
    (148, "el-GR"), // Greek Polytonic
    (150, "az-Latn-AZ"), // Azerbaijani Roman Script
];

/// Windows language ids (LCIDs).
#[rustfmt::skip]
const WINDOWS_LANGUAGE_IDS: &[(u16, &str)] = &[
    (0x0401, "ar-SA"),
    (0x0402, "bg-BG"),
    (0x0403, "ca-ES"),
    (0x0404, "zh-Hant"),
    (0x0405, "cs-CZ"),
    (0x0406, "da-DK"),
    (0x0407, "de-DE"),
    (0x0408, "el-GR"),
    (0x0409, "en-US"),
    (0x040a, "es-ES"),
    (0x040b, "fi-FI"),
    (0x040c, "fr-FR"),
    (0x040d, "he-IL"),
    (0x040e, "hu-HU"),
    (0x040f, "is-IS"),
    (0x0410, "it-IT"),
    (0x0411, "ja-JP"),
    (0x0412, "ko-KR"),
    (0x0413, "nl-NL"),
    (0x0414, "nb-NO"),
    (0x0415, "pl-PL"),
    (0x0416, "pt-BR"),
    (0x0417, "rm-CH"),
    (0x0418, "ro-RO"),
    (0x0419, "ru-RU"),
    (0x041a, "hr-HR"),
    (0x041b, "sk-SK"),
    (0x041c, "sq-AL"),
    (0x041d, "sv-SE"),
    (0x041e, "th-TH"),
    (0x041f, "tr-TR"),
    (0x0420, "ur-PK"),
    (0x0421, "id-ID"),
    (0x0422, "uk-UA"),
    (0x0423, "be-BY"),
    (0x0424, "sl-SI"),
    (0x0425, "et-EE"),
    (0x0426, "lv-LV"),
    (0x0427, "lt-LT"),
    (0x0428, "tg-Cyrl-TJ"),
    (0x0429, "fa-IR"),
    (0x042a, "vi-VN"),
    (0x042b, "hy-AM"),
    (0x042c, "az-Latn-AZ"),
    (0x042d, "eu-ES"),
    (0x042e, "wen-DE"),
    (0x042f, "mk-MK"),
    (0x0430, "st-ZA"),
    (0x0431, "ts-ZA"),
    (0x0432, "tn-ZA"),
    (0x0433, "ven-ZA"),
    (0x0434, "xh-ZA"),
    (0x0435, "zu-ZA"),
    (0x0436, "af-ZA"),
    (0x0437, "ka-GE"),
    (0x0438, "fo-FO"),
    (0x0439, "hi-IN"),
    (0x043a, "mt-MT"),
    (0x043b, "se-NO"),
    (0x043c, "gd-GB"),
    (0x043d, "yi"),
    (0x043e, "ms-MY"),
    (0x043f, "kk-KZ"),
    (0x0440, "ky-KG"),
    (0x0441, "sw-KE"),
    (0x0442, "tk-TM"),
    (0x0443, "uz-Latn-UZ"),
    (0x0444, "tt-RU"),
    (0x0445, "bn-IN"),
    (0x0446, "pa-IN"),
    (0x0447, "gu-IN"),
    (0x0448, "or-IN"),
    (0x0449, "ta-IN"),
    (0x044a, "te-IN"),
    (0x044b, "kn-IN"),
    (0x044c, "ml-IN"),
    (0x044d, "as-IN"),
    (0x044e, "mr-IN"),
    (0x044f, "sa-IN"),
    (0x0450, "mn-MN"),
    (0x0451, "bo-CN"),
    (0x0452, "cy-GB"),
    (0x0453, "km-KH"),
    (0x0454, "lo-LA"),
    (0x0455, "my-MM"),
    (0x0456, "gl-ES"),
    (0x0457, "kok-IN"),
    (0x0458, "mni"),
    (0x0459, "sd-IN"),
    (0x045a, "syr-SY"),
    (0x045b, "si-LK"),
    (0x045c, "chr-US"),
    (0x045d, "iu-Cans-CA"),
    (0x045e, "am-ET"),
    (0x045f, "tmz"),
    (0x0460, "ks-Arab-IN"),
    (0x0461, "ne-NP"),
    (0x0462, "fy-NL"),
    (0x0463, "ps-AF"),
    (0x0464, "fil-PH"),
    (0x0465, "dv-MV"),
    (0x0466, "bin-NG"),
    (0x0467, "fuv-NG"),
    (0x0468, "ha-Latn-NG"),
    (0x0469, "ibb-NG"),
    (0x046a, "yo-NG"),
    (0x046b, "quz-BO"),
    (0x046c, "nso-ZA"),
    (0x0470, "ig-NG"),
    (0x0471, "kr-NG"),
    (0x0472, "gaz-ET"),
    (0x0473, "ti-ER"),
    (0x0474, "gn-PY"),
    (0x0475, "haw-US"),
    (0x0476, "la"),
    (0x0477, "so-SO"),
    (0x0478, "ii-CN"),
    (0x0479, "pap-AN"),
    (0x0480, "ug-Arab-CN"),
    (0x0481, "mi-NZ"),
    (0x0801, "ar-IQ"),
    (0x0804, "zh-Hans"),
    (0x0807, "de-CH"),
    (0x0809, "en-GB"),
    (0x080a, "es-MX"),
    (0x080c, "fr-BE"),
    (0x0810, "it-CH"),
    (0x0813, "nl-BE"),
    (0x0814, "nn-NO"),
    (0x0816, "pt-PT"),
    (0x0818, "ro-MD"),
    (0x0819, "ru-MD"),
    (0x081a, "sr-Latn-CS"),
    (0x081d, "sv-FI"),
    (0x0820, "ur-IN"),
    (0x082c, "az-Cyrl-AZ"),
    (0x083c, "ga-IE"),
    (0x083e, "ms-BN"),
    (0x0843, "uz-Cyrl-UZ"),
    (0x0845, "bn-BD"),
    (0x0846, "pa-PK"),
    (0x0850, "mn-Mong-CN"),
    (0x0851, "bo-BT"),
    (0x0859, "sd-PK"),
    (0x085f, "tzm-Latn-DZ"),
    (0x0860, "ks-Deva-IN"),
    (0x0861, "ne-IN"),
    (0x086b, "quz-EC"),
    (0x0873, "ti-ET"),
    (0x0c01, "ar-EG"),
    (0x0c04, "zh-HK"),
    (0x0c07, "de-AT"),
    (0x0c09, "en-AU"),
    (0x0c0c, "fr-CA"),
    (0x0c1a, "sr-Cyrl-CS"),
    (0x0c6b, "quz-PE"),
    (0x1001, "ar-LY"),
    (0x1004, "zh-SG"),
    (0x1007, "de-LU"),
    (0x1009, "en-CA"),
    (0x100a, "es-GT"),
    (0x100c, "fr-CH"),
    (0x101a, "hr-BA"),
    (0x1401, "ar-DZ"),
    (0x1404, "zh-MO"),
    (0x1407, "de-LI"),
    (0x1409, "en-NZ"),
    (0x140a, "es-CR"),
    (0x140c, "fr-LU"),
    (0x141a, "bs-Latn-BA"),
    (0x1801, "ar-MO"),
    (0x1809, "en-IE"),
    (0x180a, "es-PA"),
    (0x180c, "fr-MC"),
    (0x1c01, "ar-TN"),
    (0x1c09, "en-ZA"),
    (0x1c0a, "es-DO"),
    (0x1c0c, "fr-029"),
    (0x2001, "ar-OM"),
    (0x2009, "en-JM"),
    (0x200a, "es-VE"),
    (0x200c, "fr-RE"),
    (0x2401, "ar-YE"),
    (0x2409, "en-029"),
    (0x240a, "es-CO"),
    (0x240c, "fr-CG"),
    (0x2801, "ar-SY"),
    (0x2809, "en-BZ"),
    (0x280a, "es-PE"),
    (0x280c, "fr-SN"),
    (0x2c01, "ar-JO"),
    (0x2c09, "en-TT"),
    (0x2c0a, "es-AR"),
    (0x2c0c, "fr-CM"),
    (0x3001, "ar-LB"),
    (0x3009, "en-ZW"),
    (0x300a, "es-EC"),
    (0x300c, "fr-CI"),
    (0x3401, "ar-KW"),
    (0x3409, "en-PH"),
    (0x340a, "es-CL"),
    (0x340c, "fr-ML"),
    (0x3801, "ar-AE"),
    (0x3809, "en-ID"),
    (0x380a, "es-UY"),
    (0x380c, "fr-MA"),
    (0x3c01, "ar-BH"),
    (0x3c09, "en-HK"),
    (0x3c0a, "es-PY"),
    (0x3c0c, "fr-HT"),
    (0x4001, "ar-QA"),
    (0x4009, "en-IN"),
    (0x400a, "es-BO"),
    (0x4409, "en-MY"),
    (0x440a, "es-SV"),
    (0x4809, "en-SG"),
    (0x480a, "es-HN"),
    (0x4c0a, "es-NI"),
    (0x500a, "es-PR"),
    (0x540a, "es-US"),
    (0xe40a, "es-419"),
    (0xe40c, "fr-015"),
];
