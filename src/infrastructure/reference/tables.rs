//! Built-in reference tables.
//!
//! Codes are lowercase ISO 3166-1 alpha-2, plus the pseudo-countries used by
//! geolocation databases (`a1`, `a2`, `o1`, `ap`, `eu`).

use crate::domain::entities::Continent;
use crate::domain::entities::Continent::*;

/// Country code, continent and English name, in display order.
///
/// Every ISO 3166-1 country is listed, pseudo-countries first.
pub const COUNTRIES: &[(&str, Continent, &str)] = &[
    ("a1", Unknown, "Anonymous Proxy"),
    ("a2", Unknown, "Satellite Provider"),
    ("o1", Unknown, "Other Country"),
    ("ap", Asia, "Asia/Pacific Region"),
    ("eu", Europe, "Europe"),
    ("ad", Europe, "Andorra"),
    ("ae", Asia, "United Arab Emirates"),
    ("af", Asia, "Afghanistan"),
    ("ag", CentralAmerica, "Antigua and Barbuda"),
    ("ai", CentralAmerica, "Anguilla"),
    ("al", Europe, "Albania"),
    ("am", Asia, "Armenia"),
    ("ao", Africa, "Angola"),
    ("aq", Antarctica, "Antarctica"),
    ("ar", SouthAmerica, "Argentina"),
    ("as", Oceania, "American Samoa"),
    ("at", Europe, "Austria"),
    ("au", Oceania, "Australia"),
    ("aw", CentralAmerica, "Aruba"),
    ("ax", Europe, "Aland Islands"),
    ("az", Asia, "Azerbaijan"),
    ("ba", Europe, "Bosnia and Herzegovina"),
    ("bb", CentralAmerica, "Barbados"),
    ("bd", Asia, "Bangladesh"),
    ("be", Europe, "Belgium"),
    ("bf", Africa, "Burkina Faso"),
    ("bg", Europe, "Bulgaria"),
    ("bh", Asia, "Bahrain"),
    ("bi", Africa, "Burundi"),
    ("bj", Africa, "Benin"),
    ("bl", CentralAmerica, "Saint Barthelemy"),
    ("bm", NorthAmerica, "Bermuda"),
    ("bn", Asia, "Brunei"),
    ("bo", SouthAmerica, "Bolivia"),
    ("bq", CentralAmerica, "Caribbean Netherlands"),
    ("br", SouthAmerica, "Brazil"),
    ("bs", CentralAmerica, "Bahamas"),
    ("bt", Asia, "Bhutan"),
    ("bv", Antarctica, "Bouvet Island"),
    ("bw", Africa, "Botswana"),
    ("by", Europe, "Belarus"),
    ("bz", CentralAmerica, "Belize"),
    ("ca", NorthAmerica, "Canada"),
    ("cc", Asia, "Cocos (Keeling) Islands"),
    ("cd", Africa, "Congo (Kinshasa)"),
    ("cf", Africa, "Central African Republic"),
    ("cg", Africa, "Congo (Brazzaville)"),
    ("ch", Europe, "Switzerland"),
    ("ci", Africa, "Cote d'Ivoire"),
    ("ck", Oceania, "Cook Islands"),
    ("cl", SouthAmerica, "Chile"),
    ("cm", Africa, "Cameroon"),
    ("cn", Asia, "China"),
    ("co", SouthAmerica, "Colombia"),
    ("cr", CentralAmerica, "Costa Rica"),
    ("cu", CentralAmerica, "Cuba"),
    ("cv", Africa, "Cape Verde"),
    ("cw", CentralAmerica, "Curacao"),
    ("cx", Asia, "Christmas Island"),
    ("cy", Asia, "Cyprus"),
    ("cz", Europe, "Czech Republic"),
    ("de", Europe, "Germany"),
    ("dj", Africa, "Djibouti"),
    ("dk", Europe, "Denmark"),
    ("dm", CentralAmerica, "Dominica"),
    ("do", CentralAmerica, "Dominican Republic"),
    ("dz", Africa, "Algeria"),
    ("ec", SouthAmerica, "Ecuador"),
    ("ee", Europe, "Estonia"),
    ("eg", Africa, "Egypt"),
    ("eh", Africa, "Western Sahara"),
    ("er", Africa, "Eritrea"),
    ("es", Europe, "Spain"),
    ("et", Africa, "Ethiopia"),
    ("fi", Europe, "Finland"),
    ("fj", Oceania, "Fiji"),
    ("fk", SouthAmerica, "Falkland Islands"),
    ("fm", Oceania, "Micronesia"),
    ("fo", Europe, "Faroe Islands"),
    ("fr", Europe, "France"),
    ("ga", Africa, "Gabon"),
    ("gb", Europe, "United Kingdom"),
    ("gd", CentralAmerica, "Grenada"),
    ("ge", Asia, "Georgia"),
    ("gf", SouthAmerica, "French Guiana"),
    ("gg", Europe, "Guernsey"),
    ("gh", Africa, "Ghana"),
    ("gi", Europe, "Gibraltar"),
    ("gl", NorthAmerica, "Greenland"),
    ("gm", Africa, "Gambia"),
    ("gn", Africa, "Guinea"),
    ("gp", CentralAmerica, "Guadeloupe"),
    ("gq", Africa, "Equatorial Guinea"),
    ("gr", Europe, "Greece"),
    ("gs", Antarctica, "South Georgia and the South Sandwich Islands"),
    ("gt", CentralAmerica, "Guatemala"),
    ("gu", Oceania, "Guam"),
    ("gw", Africa, "Guinea-Bissau"),
    ("gy", SouthAmerica, "Guyana"),
    ("hk", Asia, "Hong Kong"),
    ("hm", Antarctica, "Heard Island and McDonald Islands"),
    ("hn", CentralAmerica, "Honduras"),
    ("hr", Europe, "Croatia"),
    ("ht", CentralAmerica, "Haiti"),
    ("hu", Europe, "Hungary"),
    ("id", Asia, "Indonesia"),
    ("ie", Europe, "Ireland"),
    ("il", Asia, "Israel"),
    ("im", Europe, "Isle of Man"),
    ("in", Asia, "India"),
    ("io", Asia, "British Indian Ocean Territory"),
    ("iq", Asia, "Iraq"),
    ("ir", Asia, "Iran"),
    ("is", Europe, "Iceland"),
    ("it", Europe, "Italy"),
    ("je", Europe, "Jersey"),
    ("jm", CentralAmerica, "Jamaica"),
    ("jo", Asia, "Jordan"),
    ("jp", Asia, "Japan"),
    ("ke", Africa, "Kenya"),
    ("kg", Asia, "Kyrgyzstan"),
    ("kh", Asia, "Cambodia"),
    ("ki", Oceania, "Kiribati"),
    ("km", Africa, "Comoros"),
    ("kn", CentralAmerica, "Saint Kitts and Nevis"),
    ("kp", Asia, "North Korea"),
    ("kr", Asia, "South Korea"),
    ("kw", Asia, "Kuwait"),
    ("ky", CentralAmerica, "Cayman Islands"),
    ("kz", Asia, "Kazakhstan"),
    ("la", Asia, "Laos"),
    ("lb", Asia, "Lebanon"),
    ("lc", CentralAmerica, "Saint Lucia"),
    ("li", Europe, "Liechtenstein"),
    ("lk", Asia, "Sri Lanka"),
    ("lr", Africa, "Liberia"),
    ("ls", Africa, "Lesotho"),
    ("lt", Europe, "Lithuania"),
    ("lu", Europe, "Luxembourg"),
    ("lv", Europe, "Latvia"),
    ("ly", Africa, "Libya"),
    ("ma", Africa, "Morocco"),
    ("mc", Europe, "Monaco"),
    ("md", Europe, "Moldova"),
    ("me", Europe, "Montenegro"),
    ("mf", CentralAmerica, "Saint Martin"),
    ("mg", Africa, "Madagascar"),
    ("mh", Oceania, "Marshall Islands"),
    ("mk", Europe, "North Macedonia"),
    ("ml", Africa, "Mali"),
    ("mm", Asia, "Myanmar"),
    ("mn", Asia, "Mongolia"),
    ("mo", Asia, "Macao"),
    ("mp", Oceania, "Northern Mariana Islands"),
    ("mq", CentralAmerica, "Martinique"),
    ("mr", Africa, "Mauritania"),
    ("ms", CentralAmerica, "Montserrat"),
    ("mt", Europe, "Malta"),
    ("mu", Africa, "Mauritius"),
    ("mv", Asia, "Maldives"),
    ("mw", Africa, "Malawi"),
    ("mx", NorthAmerica, "Mexico"),
    ("my", Asia, "Malaysia"),
    ("mz", Africa, "Mozambique"),
    ("na", Africa, "Namibia"),
    ("nc", Oceania, "New Caledonia"),
    ("ne", Africa, "Niger"),
    ("nf", Oceania, "Norfolk Island"),
    ("ng", Africa, "Nigeria"),
    ("ni", CentralAmerica, "Nicaragua"),
    ("nl", Europe, "Netherlands"),
    ("no", Europe, "Norway"),
    ("np", Asia, "Nepal"),
    ("nr", Oceania, "Nauru"),
    ("nu", Oceania, "Niue"),
    ("nz", Oceania, "New Zealand"),
    ("om", Asia, "Oman"),
    ("pa", CentralAmerica, "Panama"),
    ("pe", SouthAmerica, "Peru"),
    ("pf", Oceania, "French Polynesia"),
    ("pg", Oceania, "Papua New Guinea"),
    ("ph", Asia, "Philippines"),
    ("pk", Asia, "Pakistan"),
    ("pl", Europe, "Poland"),
    ("pm", NorthAmerica, "Saint Pierre and Miquelon"),
    ("pn", Oceania, "Pitcairn"),
    ("pr", CentralAmerica, "Puerto Rico"),
    ("ps", Asia, "Palestinian Territory"),
    ("pt", Europe, "Portugal"),
    ("pw", Oceania, "Palau"),
    ("py", SouthAmerica, "Paraguay"),
    ("qa", Asia, "Qatar"),
    ("re", Africa, "Reunion"),
    ("ro", Europe, "Romania"),
    ("rs", Europe, "Serbia"),
    ("ru", Europe, "Russia"),
    ("rw", Africa, "Rwanda"),
    ("sa", Asia, "Saudi Arabia"),
    ("sb", Oceania, "Solomon Islands"),
    ("sc", Africa, "Seychelles"),
    ("sd", Africa, "Sudan"),
    ("se", Europe, "Sweden"),
    ("sg", Asia, "Singapore"),
    ("sh", Africa, "Saint Helena"),
    ("si", Europe, "Slovenia"),
    ("sj", Europe, "Svalbard and Jan Mayen"),
    ("sk", Europe, "Slovakia"),
    ("sl", Africa, "Sierra Leone"),
    ("sm", Europe, "San Marino"),
    ("sn", Africa, "Senegal"),
    ("so", Africa, "Somalia"),
    ("sr", SouthAmerica, "Suriname"),
    ("ss", Africa, "South Sudan"),
    ("st", Africa, "Sao Tome and Principe"),
    ("sv", CentralAmerica, "El Salvador"),
    ("sx", CentralAmerica, "Sint Maarten"),
    ("sy", Asia, "Syria"),
    ("sz", Africa, "Eswatini"),
    ("tc", CentralAmerica, "Turks and Caicos Islands"),
    ("td", Africa, "Chad"),
    ("tf", Antarctica, "French Southern Territories"),
    ("tg", Africa, "Togo"),
    ("th", Asia, "Thailand"),
    ("tj", Asia, "Tajikistan"),
    ("tk", Oceania, "Tokelau"),
    ("tl", Asia, "Timor-Leste"),
    ("tm", Asia, "Turkmenistan"),
    ("tn", Africa, "Tunisia"),
    ("to", Oceania, "Tonga"),
    ("tr", Europe, "Turkey"),
    ("tt", CentralAmerica, "Trinidad and Tobago"),
    ("tv", Oceania, "Tuvalu"),
    ("tw", Asia, "Taiwan"),
    ("tz", Africa, "Tanzania"),
    ("ua", Europe, "Ukraine"),
    ("ug", Africa, "Uganda"),
    ("um", Oceania, "United States Minor Outlying Islands"),
    ("us", NorthAmerica, "United States"),
    ("uy", SouthAmerica, "Uruguay"),
    ("uz", Asia, "Uzbekistan"),
    ("va", Europe, "Vatican City"),
    ("vc", CentralAmerica, "Saint Vincent and the Grenadines"),
    ("ve", SouthAmerica, "Venezuela"),
    ("vg", CentralAmerica, "British Virgin Islands"),
    ("vi", CentralAmerica, "U.S. Virgin Islands"),
    ("vn", Asia, "Vietnam"),
    ("vu", Oceania, "Vanuatu"),
    ("wf", Oceania, "Wallis and Futuna"),
    ("ws", Oceania, "Samoa"),
    ("ye", Asia, "Yemen"),
    ("yt", Africa, "Mayotte"),
    ("za", Africa, "South Africa"),
    ("zm", Africa, "Zambia"),
    ("zw", Africa, "Zimbabwe"),
];

/// International calling codes, without the leading `+`. Pseudo-countries
/// and uninhabited territories have none.
pub const CALLING_CODES: &[(&str, &str)] = &[
    ("ad", "376"),
    ("ae", "971"),
    ("af", "93"),
    ("ag", "1"),
    ("ai", "1"),
    ("al", "355"),
    ("am", "374"),
    ("ao", "244"),
    ("ar", "54"),
    ("as", "1"),
    ("at", "43"),
    ("au", "61"),
    ("aw", "297"),
    ("ax", "358"),
    ("az", "994"),
    ("ba", "387"),
    ("bb", "1"),
    ("bd", "880"),
    ("be", "32"),
    ("bf", "226"),
    ("bg", "359"),
    ("bh", "973"),
    ("bi", "257"),
    ("bj", "229"),
    ("bl", "590"),
    ("bm", "1"),
    ("bn", "673"),
    ("bo", "591"),
    ("bq", "599"),
    ("br", "55"),
    ("bs", "1"),
    ("bt", "975"),
    ("bw", "267"),
    ("by", "375"),
    ("bz", "501"),
    ("ca", "1"),
    ("cc", "61"),
    ("cd", "243"),
    ("cf", "236"),
    ("cg", "242"),
    ("ch", "41"),
    ("ci", "225"),
    ("ck", "682"),
    ("cl", "56"),
    ("cm", "237"),
    ("cn", "86"),
    ("co", "57"),
    ("cr", "506"),
    ("cu", "53"),
    ("cv", "238"),
    ("cw", "599"),
    ("cx", "61"),
    ("cy", "357"),
    ("cz", "420"),
    ("de", "49"),
    ("dj", "253"),
    ("dk", "45"),
    ("dm", "1"),
    ("do", "1"),
    ("dz", "213"),
    ("ec", "593"),
    ("ee", "372"),
    ("eg", "20"),
    ("eh", "212"),
    ("er", "291"),
    ("es", "34"),
    ("et", "251"),
    ("fi", "358"),
    ("fj", "679"),
    ("fk", "500"),
    ("fm", "691"),
    ("fo", "298"),
    ("fr", "33"),
    ("ga", "241"),
    ("gb", "44"),
    ("gd", "1"),
    ("ge", "995"),
    ("gf", "594"),
    ("gg", "44"),
    ("gh", "233"),
    ("gi", "350"),
    ("gl", "299"),
    ("gm", "220"),
    ("gn", "224"),
    ("gp", "590"),
    ("gq", "240"),
    ("gr", "30"),
    ("gt", "502"),
    ("gu", "1"),
    ("gw", "245"),
    ("gy", "592"),
    ("hk", "852"),
    ("hn", "504"),
    ("hr", "385"),
    ("ht", "509"),
    ("hu", "36"),
    ("id", "62"),
    ("ie", "353"),
    ("il", "972"),
    ("im", "44"),
    ("in", "91"),
    ("io", "246"),
    ("iq", "964"),
    ("ir", "98"),
    ("is", "354"),
    ("it", "39"),
    ("je", "44"),
    ("jm", "1"),
    ("jo", "962"),
    ("jp", "81"),
    ("ke", "254"),
    ("kg", "996"),
    ("kh", "855"),
    ("ki", "686"),
    ("km", "269"),
    ("kn", "1"),
    ("kp", "850"),
    ("kr", "82"),
    ("kw", "965"),
    ("ky", "1"),
    ("kz", "7"),
    ("la", "856"),
    ("lb", "961"),
    ("lc", "1"),
    ("li", "423"),
    ("lk", "94"),
    ("lr", "231"),
    ("ls", "266"),
    ("lt", "370"),
    ("lu", "352"),
    ("lv", "371"),
    ("ly", "218"),
    ("ma", "212"),
    ("mc", "377"),
    ("md", "373"),
    ("me", "382"),
    ("mf", "590"),
    ("mg", "261"),
    ("mh", "692"),
    ("mk", "389"),
    ("ml", "223"),
    ("mm", "95"),
    ("mn", "976"),
    ("mo", "853"),
    ("mp", "1"),
    ("mq", "596"),
    ("mr", "222"),
    ("ms", "1"),
    ("mt", "356"),
    ("mu", "230"),
    ("mv", "960"),
    ("mw", "265"),
    ("mx", "52"),
    ("my", "60"),
    ("mz", "258"),
    ("na", "264"),
    ("nc", "687"),
    ("ne", "227"),
    ("nf", "672"),
    ("ng", "234"),
    ("ni", "505"),
    ("nl", "31"),
    ("no", "47"),
    ("np", "977"),
    ("nr", "674"),
    ("nu", "683"),
    ("nz", "64"),
    ("om", "968"),
    ("pa", "507"),
    ("pe", "51"),
    ("pf", "689"),
    ("pg", "675"),
    ("ph", "63"),
    ("pk", "92"),
    ("pl", "48"),
    ("pm", "508"),
    ("pn", "64"),
    ("pr", "1"),
    ("ps", "970"),
    ("pt", "351"),
    ("pw", "680"),
    ("py", "595"),
    ("qa", "974"),
    ("re", "262"),
    ("ro", "40"),
    ("rs", "381"),
    ("ru", "7"),
    ("rw", "250"),
    ("sa", "966"),
    ("sb", "677"),
    ("sc", "248"),
    ("sd", "249"),
    ("se", "46"),
    ("sg", "65"),
    ("sh", "290"),
    ("si", "386"),
    ("sj", "47"),
    ("sk", "421"),
    ("sl", "232"),
    ("sm", "378"),
    ("sn", "221"),
    ("so", "252"),
    ("sr", "597"),
    ("ss", "211"),
    ("st", "239"),
    ("sv", "503"),
    ("sx", "1"),
    ("sy", "963"),
    ("sz", "268"),
    ("tc", "1"),
    ("td", "235"),
    ("tg", "228"),
    ("th", "66"),
    ("tj", "992"),
    ("tk", "690"),
    ("tl", "670"),
    ("tm", "993"),
    ("tn", "216"),
    ("to", "676"),
    ("tr", "90"),
    ("tt", "1"),
    ("tv", "688"),
    ("tw", "886"),
    ("tz", "255"),
    ("ua", "380"),
    ("ug", "256"),
    ("us", "1"),
    ("uy", "598"),
    ("uz", "998"),
    ("va", "39"),
    ("vc", "1"),
    ("ve", "58"),
    ("vg", "1"),
    ("vi", "1"),
    ("vn", "84"),
    ("vu", "678"),
    ("wf", "681"),
    ("ws", "685"),
    ("ye", "967"),
    ("yt", "262"),
    ("za", "27"),
    ("zm", "260"),
    ("zw", "263"),
];

/// Country most associated with a bare language code.
pub const LANGUAGE_COUNTRIES: &[(&str, &str)] = &[
    ("af", "za"),
    ("am", "et"),
    ("ar", "sa"),
    ("az", "az"),
    ("be", "by"),
    ("bg", "bg"),
    ("bn", "bd"),
    ("bs", "ba"),
    ("ca", "es"),
    ("cs", "cz"),
    ("cy", "gb"),
    ("da", "dk"),
    ("de", "de"),
    ("dv", "mv"),
    ("el", "gr"),
    ("en", "us"),
    ("es", "es"),
    ("et", "ee"),
    ("eu", "es"),
    ("fa", "ir"),
    ("fi", "fi"),
    ("fil", "ph"),
    ("fr", "fr"),
    ("ga", "ie"),
    ("gl", "es"),
    ("ha", "ng"),
    ("he", "il"),
    ("hi", "in"),
    ("hr", "hr"),
    ("ht", "ht"),
    ("hu", "hu"),
    ("hy", "am"),
    ("id", "id"),
    ("is", "is"),
    ("it", "it"),
    ("ja", "jp"),
    ("ka", "ge"),
    ("kk", "kz"),
    ("km", "kh"),
    ("ko", "kr"),
    ("ky", "kg"),
    ("lb", "lu"),
    ("lo", "la"),
    ("lt", "lt"),
    ("lv", "lv"),
    ("mg", "mg"),
    ("mk", "mk"),
    ("mn", "mn"),
    ("ms", "my"),
    ("mt", "mt"),
    ("my", "mm"),
    ("nb", "no"),
    ("ne", "np"),
    ("nl", "nl"),
    ("nn", "no"),
    ("pl", "pl"),
    ("ps", "af"),
    ("pt", "pt"),
    ("ro", "ro"),
    ("ru", "ru"),
    ("rw", "rw"),
    ("si", "lk"),
    ("sk", "sk"),
    ("sl", "si"),
    ("sm", "ws"),
    ("so", "so"),
    ("sq", "al"),
    ("sr", "rs"),
    ("sv", "se"),
    ("sw", "tz"),
    ("ta", "lk"),
    ("tg", "tj"),
    ("th", "th"),
    ("tk", "tm"),
    ("tl", "ph"),
    ("to", "to"),
    ("tr", "tr"),
    ("uk", "ua"),
    ("ur", "pk"),
    ("uz", "uz"),
    ("vi", "vn"),
    ("yo", "ng"),
    ("zh", "cn"),
    ("zu", "za"),
];
