//! Word lists for French, Spanish, Portuguese and German.
//!
//! Entries are lowercase; patterns built from them match case-insensitively.

/// Cardinal number words that unambiguously denote a quantity.
///
/// Open compounds (`dix-sept`, `treinta y cinco`) are covered by their parts.
/// German closed compounds (`zweihundert`, `einundzwanzig`) are matched from
/// [`DE_NUMBER_PARTS`] by pattern.
///
/// Words with a common non-numeric reading are listed in
/// [`AMBIGUOUS_NUMBER_WORDS`] instead.
pub const NUMBER_WORDS: &[&str] = &[
    // fr
    "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze", "douze",
    "treize", "quatorze", "quinze", "seize", "vingt", "vingts", "trente", "quarante",
    "cinquante", "soixante", "cent", "cents", "mille", "million", "millions", "milliard",
    "milliards",
    // es
    "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez", "once", "doce",
    "trece", "catorce", "quince", "dieciséis", "diecisiete", "dieciocho", "diecinueve", "veinte",
    "veintiuno", "veintidós", "veintitrés", "veinticuatro", "veinticinco", "veintiséis",
    "veintisiete", "veintiocho", "veintinueve", "treinta", "cuarenta", "cincuenta", "sesenta",
    "setenta", "ochenta", "noventa", "cien", "ciento", "doscientos", "doscientas",
    "trescientos", "trescientas", "cuatrocientos", "cuatrocientas", "quinientos", "quinientas",
    "seiscientos", "seiscientas", "setecientos", "setecientas", "ochocientos", "ochocientas",
    "novecientos", "novecientas", "mil", "millón", "millones", "millardo", "millardos", "billón",
    "billones",
    // pt
    "dois", "duas", "três", "quatro", "sete", "oito", "nove", "dez", "doze", "treze", "catorze",
    "dezesseis", "dezasseis", "dezessete", "dezassete", "dezoito", "dezenove",
    "dezanove", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "oitenta", "cem",
    "cento", "duzentos", "duzentas", "trezentos", "trezentas", "quatrocentos", "quatrocentas",
    "quinhentos", "quinhentas", "seiscentos", "seiscentas", "setecentos", "setecentas",
    "oitocentos", "oitocentas", "novecentos", "novecentas", "milhão", "milhões", "bilhão",
    "bilhões",
    // de
    "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn", "elf",
    "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
    "neunzehn", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig", "hundert", "tausend", "millionen", "milliarde", "milliarden", "billion",
    "billionen",
];

/// Parts of German closed number compounds. A compound is two or more parts
/// written as one word; `und` and `ein` alone are not numbers.
pub const DE_NUMBER_PARTS: &[&str] = &[
    "ein", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
    "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
    "neunzehn", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig", "hundert", "tausend", "und",
];

/// Words that are numerals or something else depending on context: the
/// indefinite articles, and Portuguese `dos` ("de" + "os").
pub const AMBIGUOUS_NUMBER_WORDS: &[&str] = &["un", "uno", "um", "dos"];

/// Ordinal words as (stem, inflection suffixes). A stem with an empty suffix
/// list must match exactly.
///
/// Portuguese weekdays share the feminine forms (`segunda-feira`); the
/// ordinal finder rejects a match followed by `-feira`.
pub const ORDINAL_STEMS: &[(&str, &[&str])] = &[
    // fr: every `-ième` form is handled by pattern, these are the irregulars
    ("premier", &["", "s"]),
    ("première", &["", "s"]),
    ("second", &["", "e", "s", "es"]),
    // es
    ("primer", &["", "o", "a", "os", "as"]),
    ("segund", ES_PT_GENDER),
    ("tercer", &["", "o", "a", "os", "as"]),
    ("cuart", ES_PT_GENDER),
    ("quint", ES_PT_GENDER),
    ("sext", ES_PT_GENDER),
    ("séptim", ES_PT_GENDER),
    ("septim", ES_PT_GENDER),
    ("octav", ES_PT_GENDER),
    ("noven", ES_PT_GENDER),
    ("décim", ES_PT_GENDER),
    ("undécim", ES_PT_GENDER),
    ("duodécim", ES_PT_GENDER),
    ("vigésim", ES_PT_GENDER),
    ("trigésim", ES_PT_GENDER),
    ("cuadragésim", ES_PT_GENDER),
    ("quincuagésim", ES_PT_GENDER),
    ("centésim", ES_PT_GENDER),
    ("milésim", ES_PT_GENDER),
    // pt
    ("primeir", ES_PT_GENDER),
    ("terceir", ES_PT_GENDER),
    ("quart", ES_PT_GENDER),
    ("sétim", ES_PT_GENDER),
    ("oitav", ES_PT_GENDER),
    ("non", &["o", "a"]),
    ("quadragésim", ES_PT_GENDER),
    ("quinquagésim", ES_PT_GENDER),
    // de
    ("erst", DE_DECLENSION),
    ("zweit", DE_DECLENSION),
    ("dritt", DE_DECLENSION),
    ("viert", DE_DECLENSION),
    ("fünft", DE_DECLENSION),
    ("sechst", DE_DECLENSION),
    ("siebt", DE_DECLENSION),
    ("acht", DE_DECLENSION),
    ("neunt", DE_DECLENSION),
    ("zehnt", DE_DECLENSION),
    ("elft", DE_DECLENSION),
    ("zwölft", DE_DECLENSION),
    ("hundertst", DE_DECLENSION),
    ("tausendst", DE_DECLENSION),
];

const ES_PT_GENDER: &[&str] = &["o", "a", "os", "as"];
const DE_DECLENSION: &[&str] = &["e", "en", "er", "es", "em"];

/// Currency names with their plural forms.
pub const CURRENCY_WORDS: &[&str] = &[
    "euro", "euros", "dollar", "dollars", "dólar", "dólares", "livre", "livres", "libra",
    "libras", "pfund", "yen", "yens", "yenes", "iene", "ienes", "yuan", "yuans", "yuanes",
    "franc", "francs", "franco", "francos", "franken", "rouble", "roubles", "rublo", "rublos",
    "rubel", "peso", "pesos", "real", "reais", "reales", "sol", "soles", "quetzal", "quetzales",
    "colón", "colones", "bolívar", "bolívares",
];

/// Abbreviated units, valid only directly after a quantity.
pub const UNIT_SHORT: &[&str] = &[
    "km", "cm", "mm", "m", "kg", "hg", "mg", "g", "ml", "cl", "l", "min", "h", "s", "°c",
];

/// Spelled-out units; plural and declension endings are added by pattern.
pub const UNIT_LONG: &[&str] = &[
    "kilomètre", "kilometre", "kilómetro", "kilometer", "quilómetro", "quilômetro",
    "mètre", "metro", "meter", "metre",
    "centimètre", "centimetro", "centímetro", "zentimeter",
    "millimètre", "milimetro", "milímetro", "millimeter",
    "gramme", "gramo", "gramm", "gram", "grama",
    "kilogramme", "kilogramo", "kilogramm", "kilogram", "quilograma",
    "hectogramme", "hectogramo", "hektogramm", "hectograma",
    "milligramme", "miligramo", "milligramm", "miligrama",
    "litre", "litro", "liter",
    "millilitre", "mililitro", "milliliter",
    "centilitre", "centilitro", "zentiliter",
    "hectolitre", "hectolitro", "hektoliter",
    "seconde", "segundo", "sekunde", "second",
    "minute", "minuto",
    "heure", "hora", "stunde", "hour",
    "degré celsius", "grado celsius", "grad celsius", "grau celsius", "celsius",
];

/// Month names, with unaccented spellings ASR output sometimes uses.
pub const MONTH_WORDS: &[&str] = &[
    // fr
    "janvier", "février", "fevrier", "mars", "avril", "mai", "juin", "juillet", "août", "aout",
    "septembre", "octobre", "novembre", "décembre", "decembre",
    // es
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "setiembre", "octubre", "noviembre", "diciembre",
    // pt
    "janeiro", "fevereiro", "março", "marco", "maio", "junho", "julho", "setembro", "outubro",
    "novembro", "dezembro",
    // de
    "januar", "jänner", "februar", "märz", "maerz", "april", "juni", "juli", "august",
    "september", "oktober", "november", "dezember",
];

/// Spelled percent expressions.
pub const PERCENT_WORDS: &[&str] = &["pour cent", "pourcent", "por ciento", "por cento", "prozent"];

/// Filler sounds; each letter may be stretched (`euuuh`, `hmmmm`).
///
/// `um` is left out: it is the Portuguese indefinite article.
pub const HESITATIONS: &[&str] = &["euh", "eh", "ehm", "hmm", "hm", "ah", "uh", "äh", "mmm"];
