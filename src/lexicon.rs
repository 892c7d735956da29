//! Name and word lists that are too large to live at their call sites.
//!
//! Slice lists are prefix lexicons : they are matched with the positional
//! string helpers and must stay ordered from shortest to longest, since
//! matching stops at the first entry longer than the remaining input.

use std::collections::HashSet;

/// First names starting with 'J' where the 'J' can also be pronounced as 'Y',
/// e.g. "Jan" as in "Yan".
pub(crate) const J_NAMES_PRONOUNCED_Y: &[&str] = &[
    "JAN", "JON", "JAN", "JIN", "JEN", "JUHL", "JULY", "JOEL", "JOHN", "JOSH", "JUDE", "JUNE",
    "JONI", "JULI", "JENA", "JUNG", "JINA", "JANA", "JENI", "JOEL", "JANN", "JONA", "JENE", "JULE",
    "JANI", "JONG", "JOHN", "JEAN", "JUNG", "JONE", "JARA", "JUST", "JOST", "JAHN", "JACO", "JANG",
    "JUDE", "JONE", "JOANN", "JANEY", "JANAE", "JOANA", "JUTTA", "JULEE", "JANAY", "JANEE",
    "JETTA", "JOHNA", "JOANE", "JAYNA", "JANES", "JONAS", "JONIE", "JUSTA", "JUNIE", "JUNKO",
    "JENAE", "JULIO", "JINNY", "JOHNS", "JACOB", "JETER", "JAFFE", "JESKE", "JANKE", "JAGER",
    "JANIK", "JANDA", "JOSHI", "JULES", "JANTZ", "JEANS", "JUDAH", "JANUS", "JENNY", "JENEE",
    "JONAH", "JONAS", "JACOB", "JOSUE", "JOSEF", "JULES", "JULIE", "JULIA", "JANIE", "JANIS",
    "JENNA", "JANNA", "JEANA", "JENNI", "JEANE", "JONNA", "JORDAN", "JORDON", "JOSEPH", "JOSHUA",
    "JOSIAH", "JOSPEH", "JUDSON", "JULIAN", "JULIUS", "JUNIOR", "JUDITH", "JOESPH", "JOHNIE",
    "JOANNE", "JEANNE", "JOANNA", "JOSEFA", "JULIET", "JANNIE", "JANELL", "JASMIN", "JANINE",
    "JOHNNY", "JEANIE", "JEANNA", "JOHNNA", "JOELLE", "JOVITA", "JOSEPH", "JONNIE", "JANEEN",
    "JANINA", "JOANIE", "JAZMIN", "JOHNIE", "JANENE", "JOHNNY", "JONELL", "JENELL", "JANETT",
    "JANETH", "JENINE", "JOELLA", "JOEANN", "JULIAN", "JOHANA", "JENICE", "JANNET", "JANISE",
    "JULENE", "JOSHUA", "JANEAN", "JAIMEE", "JOETTE", "JANYCE", "JENEVA", "JORDAN", "JACOBS",
    "JENSEN", "JOSEPH", "JANSEN", "JORDON", "JULIAN", "JAEGER", "JACOBY", "JENSON", "JARMAN",
    "JOSLIN", "JESSEN", "JAHNKE", "JACOBO", "JULIEN", "JOSHUA", "JEPSON", "JULIUS", "JANSON",
    "JACOBI", "JUDSON", "JARBOE", "JOHSON", "JANZEN", "JETTON", "JUNKER", "JONSON", "JAROSZ",
    "JENNER", "JAGGER", "JASMIN", "JEPSEN", "JORDEN", "JANNEY", "JUHASZ", "JERGEN", "JAKOB",
    "JOHNSON", "JOHNNIE", "JASMINE", "JEANNIE", "JOHANNA", "JANELLE", "JANETTE", "JULIANA",
    "JUSTINA", "JOSETTE", "JOELLEN", "JENELLE", "JULIETA", "JULIANN", "JULISSA", "JENETTE",
    "JANETTA", "JOSELYN", "JONELLE", "JESENIA", "JANESSA", "JAZMINE", "JEANENE", "JOANNIE",
    "JADWIGA", "JOLANDA", "JULIANE", "JANUARY", "JEANICE", "JANELLA", "JEANETT", "JENNINE",
    "JOHANNE", "JOHNSIE", "JANIECE", "JOHNSON", "JENNELL", "JAMISON", "JANSSEN", "JOHNSEN",
    "JARDINE", "JAGGERS", "JURGENS", "JOURDAN", "JULIANO", "JOSEPHS", "JHONSON", "JOZWIAK",
    "JANICKI", "JELINEK", "JANSSON", "JOACHIM", "JANELLE", "JACOBUS", "JENNING", "JANTZEN",
    "JOHNNIE", "JOSEFINA", "JEANNINE", "JULIANNE", "JULIANNA", "JONATHAN", "JONATHON",
    "JEANETTE", "JANNETTE", "JEANETTA", "JOHNETTA", "JENNEFER", "JULIENNE", "JOSPHINE",
    "JEANELLE", "JOHNETTE", "JULIEANN", "JOSEFINE", "JULIETTA", "JOHNSTON", "JACOBSON",
    "JACOBSEN", "JOHANSEN", "JOHANSON", "JAWORSKI", "JENNETTE", "JELLISON", "JOHANNES",
    "JASINSKI", "JUERGENS", "JARNAGIN", "JEREMIAH", "JEPPESEN", "JARNIGAN", "JANOUSEK",
    "JOHNATHAN", "JOHNATHON", "JORGENSEN", "JEANMARIE", "JOSEPHINA", "JEANNETTE", "JOSEPHINE",
    "JEANNETTA", "JORGENSON", "JANKOWSKI", "JOHNSTONE", "JABLONSKI", "JOSEPHSON", "JOHANNSEN",
    "JURGENSEN", "JIMMERSON", "JOHANSSON", "JAKUBOWSKI",
];

/// Germanic and Slavic family names starting with 'W' where the 'W' is
/// pronounced as 'V' (or 'F'), e.g. "Wagner".
pub(crate) const GERMANIC_OR_SLAVIC_W_NAMES: &[&str] = &[
    "WEE", "WIX", "WAX", "WOLF", "WEIS", "WAHL", "WALZ", "WEIL", "WERT", "WINE", "WILK", "WALT",
    "WOLL", "WADA", "WULF", "WEHR", "WURM", "WYSE", "WENZ", "WIRT", "WOLK", "WEIN", "WYSS", "WASS",
    "WANN", "WINT", "WINK", "WILE", "WIKE", "WIER", "WELK", "WISE", "WIRTH", "WIESE", "WITTE",
    "WENTZ", "WOLFF", "WENDT", "WERTZ", "WILKE", "WALTZ", "WEISE", "WOOLF", "WERTH", "WEESE",
    "WURTH", "WINES", "WARGO", "WIMER", "WISER", "WAGER", "WILLE", "WILDS", "WAGAR", "WERTS",
    "WITTY", "WIENS", "WIEBE", "WIRTZ", "WYMER", "WULFF", "WIBLE", "WINER", "WIEST", "WALKO",
    "WALLA", "WEBRE", "WEYER", "WYBLE", "WOMAC", "WILTZ", "WURST", "WOLAK", "WELKE", "WEDEL",
    "WEIST", "WYGAN", "WUEST", "WEISZ", "WALCK", "WEITZ", "WYDRA", "WANDA", "WILMA", "WEBER",
    "WETZEL", "WEINER", "WENZEL", "WESTER", "WALLEN", "WENGER", "WALLIN", "WEILER", "WIMMER",
    "WEIMER", "WYRICK", "WEGNER", "WINNER", "WESSEL", "WILKIE", "WEIGEL", "WOJCIK", "WENDEL",
    "WITTER", "WIENER", "WEISER", "WEXLER", "WACKER", "WISNER", "WITMER", "WINKLE", "WELTER",
    "WIDMER", "WITTEN", "WINDLE", "WASHER", "WOLTER", "WILKEY", "WIDNER", "WARMAN", "WEYANT",
    "WEIBEL", "WANNER", "WILKEN", "WILTSE", "WARNKE", "WALSER", "WEIKEL", "WESNER", "WITZEL",
    "WROBEL", "WAGNON", "WINANS", "WENNER", "WOLKEN", "WILNER", "WYSONG", "WYCOFF", "WUNDER",
    "WINKEL", "WIDMAN", "WELSCH", "WEHNER", "WEIGLE", "WETTER", "WUNSCH", "WHITTY", "WAXMAN",
    "WILKER", "WILHAM", "WITTIG", "WITMAN", "WESTRA", "WEHRLE", "WASSER", "WILLER", "WEGMAN",
    "WARFEL", "WYNTER", "WERNER", "WAGNER", "WISSER", "WISEMAN", "WINKLER", "WILHELM", "WELLMAN",
    "WAMPLER", "WACHTER", "WALTHER", "WYCKOFF", "WEIDNER", "WOZNIAK", "WEILAND", "WILFONG",
    "WIEGAND", "WILCHER", "WIELAND", "WILDMAN", "WALDMAN", "WORTMAN", "WYSOCKI", "WEIDMAN",
    "WITTMAN", "WIDENER", "WOLFSON", "WENDELL", "WEITZEL", "WILLMAN", "WALDRUP", "WALTMAN",
    "WALCZAK", "WEIGAND", "WESSELS", "WIDEMAN", "WOLTERS", "WIREMAN", "WILHOIT", "WEGENER",
    "WOTRING", "WINGERT", "WIESNER", "WAYMIRE", "WHETZEL", "WENTZEL", "WINEGAR", "WESTMAN",
    "WYNKOOP", "WALLICK", "WURSTER", "WINBUSH", "WILBERT", "WALLACH", "WYNKOOP", "WALLICK",
    "WURSTER", "WINBUSH", "WILBERT", "WALLACH", "WEISSER", "WEISNER", "WINDERS", "WILLMON",
    "WILLEMS", "WIERSMA", "WACHTEL", "WARNICK", "WEIDLER", "WALTRIP", "WHETSEL", "WHELESS",
    "WELCHER", "WALBORN", "WILLSEY", "WEINMAN", "WAGAMAN", "WOMMACK", "WINGLER", "WINKLES",
    "WIEDMAN", "WHITNER", "WOLFRAM", "WARLICK", "WEEDMAN", "WHISMAN", "WINLAND", "WEESNER",
    "WARTHEN", "WETZLER", "WENDLER", "WALLNER", "WOLBERT", "WITTMER", "WISHART", "WILLIAM",
    "WESTPHAL", "WICKLUND", "WEISSMAN", "WESTLUND", "WOLFGANG", "WILLHITE", "WEISBERG",
    "WALRAVEN", "WOLFGRAM", "WILHOITE", "WECHSLER", "WENDLING", "WESTBERG", "WENDLAND",
    "WININGER", "WHISNANT", "WESTRICK", "WESTLING", "WESTBURY", "WEITZMAN", "WEHMEYER",
    "WEINMANN", "WISNESKI", "WHELCHEL", "WEISHAAR", "WAGGENER", "WALDROUP", "WESTHOFF",
    "WIEDEMAN", "WASINGER", "WINBORNE", "WHISENANT", "WEINSTEIN", "WESTERMAN", "WASSERMAN",
    "WITKOWSKI", "WEINTRAUB", "WINKELMAN", "WINKFIELD", "WANAMAKER", "WIECZOREK", "WIECHMANN",
    "WOJTOWICZ", "WALKOWIAK", "WEINSTOCK", "WILLEFORD", "WARKENTIN", "WEISINGER", "WINKLEMAN",
    "WILHEMINA", "WISNIEWSKI", "WUNDERLICH", "WHISENHUNT", "WEINBERGER", "WROBLEWSKI",
    "WAGUESPACK", "WEISGERBER", "WESTERVELT", "WESTERLUND", "WASILEWSKI", "WILDERMUTH",
    "WESTENDORF", "WESOLOWSKI", "WEINGARTEN", "WINEBARGER", "WESTERBERG", "WANNAMAKER",
    "WEISSINGER", "WALDSCHMIDT", "WEINGARTNER", "WINEBRENNER", "WOLFENBARGER", "WOJCIECHOWSKI",
];

/// Greek and hispanic family names ending in "-ES" where the 'E' is
/// pronounced, e.g. "Robles", "Hermes".
pub(crate) const SPANISH_ES_NAMES: &[&str] = &[
    "INES", "LOPES", "ESTES", "GOMES", "NUNES", "ALVES", "ICKES", "INNES", "PERES", "WAGES",
    "NEVES", "BENES", "DONES", "CORTES", "CHAVES", "VALDES", "ROBLES", "TORRES", "FLORES",
    "BORGES", "NIEVES", "MONTES", "SOARES", "VALLES", "GEDDES", "ANDRES", "VIAJES", "CALLES",
    "FONTES", "HERMES", "ACEVES", "BATRES", "MATHES", "DELORES", "MORALES", "DOLORES", "ANGELES",
    "ROSALES", "MIRELES", "LINARES", "PERALES", "PAREDES", "BRIONES", "SANCHES", "CAZARES",
    "REVELES", "ESTEVES", "ALVARES", "MATTHES", "SOLARES", "CASARES", "CACERES", "STURGES",
    "RAMIRES", "FUNCHES", "BENITES", "FUENTES", "PUENTES", "TABARES", "HENTGES", "VALORES",
    "GONZALES", "MERCEDES", "FAGUNDES", "JOHANNES", "GONSALES", "BERMUDES", "CESPEDES",
    "BETANCES", "TERRONES", "DIOGENES", "CORRALES", "CABRALES", "MARTINES", "GRAJALES",
    "CERVANTES", "FERNANDES", "GONCALVES", "BENEVIDES", "CIFUENTES", "SIFUENTES", "SERVANTES",
    "HERNANDES", "BENAVIDES", "ARCHIMEDES", "CARRIZALES", "MAGALLANES",
];

/// Family names starting with "SW-" whose alternate pronunciation starts
/// with "SV-".
pub(crate) const SW_NAMES_ALT_SV: &[&str] = &[
    "SWANSON", "SWENSON", "SWINSON", "SWENSEN", "SWOBODA", "SWIDERSKI", "SWARTHOUT", "SWEARENGIN",
];

/// Family names starting with "SW-" whose alternate pronunciation starts
/// with "XV-" (the "schw-" sound).
pub(crate) const SW_NAMES_ALT_XV: &[&str] = &[
    "SWART", "SWARTZ", "SWARTS", "SWIGER", "SWITZER", "SWANGER", "SWIGERT", "SWIGART", "SWIHART",
    "SWEITZER", "SWATZELL", "SWINDLER", "SWINEHART", "SWEARINGEN",
];

lazy_static! {
    /// Words where a final 'E' is pronounced, e.g. "karate", "epitome".
    /// Matched against the whole word.
    pub(crate) static ref FINAL_E_PRONOUNCED: HashSet<&'static str> = [
        "ACME", "NIKE", "CAFE", "RENE", "LUPE", "JOSE", "ESME", "LETHE", "CADRE", "TILDE",
        "SIGNE", "POSSE", "LATTE", "ANIME", "DOLCE", "CROCE", "ADOBE", "OUTRE", "JESSE",
        "JAIME", "JAFFE", "BENGE", "RUNGE", "CHILE", "DESME", "CONDE", "URIBE", "LIBRE",
        "ANDRE", "HECATE", "PSYCHE", "DAPHNE", "PENSKE", "CLICHE", "RECIPE", "TAMALE",
        "SESAME", "SIMILE", "FINALE", "KARATE", "RENATE", "SHANTE", "OBERLE", "COYOTE",
        "KRESGE", "STONGE", "STANGE", "SWAYZE", "FUENTE", "SALOME", "URRIBE", "ECHIDNE",
        "ARIADNE", "MEINEKE", "PORSCHE", "ANEMONE", "EPITOME", "SYNCOPE", "SOUFFLE",
        "ATTACHE", "MACHETE", "KARAOKE", "BUKKAKE", "VICENTE", "ELLERBE", "VERSACE",
        "PENELOPE", "CALLIOPE", "CHIPOTLE", "ANTIGONE", "KAMIKAZE", "EURIDICE", "YOSEMITE",
        "FERRANTE", "HYPERBOLE", "GUACAMOLE", "XANTHIPPE", "SYNECDOCHE",
    ]
    .into_iter()
    .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lexicons_start_with_a_shortest_entry() {
        // the candidate matcher checks the length of the first entry before
        // scanning, so each list must lead with one of its shortest names
        for lexicon in [
            J_NAMES_PRONOUNCED_Y,
            GERMANIC_OR_SLAVIC_W_NAMES,
            SPANISH_ES_NAMES,
            SW_NAMES_ALT_SV,
            SW_NAMES_ALT_XV,
        ] {
            let shortest = lexicon.iter().map(|name| name.len()).min().unwrap();
            assert_eq!(lexicon[0].len(), shortest);
        }
    }

    #[test]
    fn test_prefix_lexicons_are_mostly_ordered_by_length() {
        // the lists are kept in their historical order for key compatibility,
        // which includes one out-of-place pair ("JAKOB" after "JERGEN")
        for lexicon in [
            J_NAMES_PRONOUNCED_Y,
            GERMANIC_OR_SLAVIC_W_NAMES,
            SPANISH_ES_NAMES,
            SW_NAMES_ALT_SV,
            SW_NAMES_ALT_XV,
        ] {
            let exceptions: Vec<(&str, &str)> = lexicon
                .windows(2)
                .filter(|pair| pair[0].len() > pair[1].len())
                .map(|pair| (pair[0], pair[1]))
                .collect();
            assert!(
                exceptions.is_empty() || exceptions == [("JERGEN", "JAKOB")],
                "unexpected out-of-order entries: {:?}",
                exceptions
            );
        }
    }

    #[test]
    fn test_final_e_lexicon() {
        assert!(FINAL_E_PRONOUNCED.contains("KARATE"));
        assert!(FINAL_E_PRONOUNCED.contains("SYNECDOCHE"));
        assert!(!FINAL_E_PRONOUNCED.contains("HOUSE"));
    }
}
