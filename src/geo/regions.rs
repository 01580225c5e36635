use super::RegionEntry;

const fn r(
    code: &'static str,
    name: &'static str,
    name_ar: &'static str,
    home_fee: i64,
    desk_fee: i64,
) -> RegionEntry {
    RegionEntry {
        code,
        name,
        name_ar,
        home_fee,
        desk_fee,
    }
}

/// The 58 wilayas with their delivery fees (DZD).
pub(super) const REGIONS: &[RegionEntry] = &[
    r("01", "Adrar", "أدرار", 900, 600),
    r("02", "Chlef", "الشلف", 450, 250),
    r("03", "Laghouat", "الأغواط", 600, 400),
    r("04", "Oum El Bouaghi", "أم البواقي", 500, 300),
    r("05", "Batna", "باتنة", 500, 300),
    r("06", "Béjaïa", "بجاية", 450, 250),
    r("07", "Biskra", "بسكرة", 600, 400),
    r("08", "Béchar", "بشار", 800, 500),
    r("09", "Blida", "البليدة", 350, 200),
    r("10", "Bouira", "البويرة", 400, 250),
    r("11", "Tamanrasset", "تمنراست", 1200, 800),
    r("12", "Tébessa", "تبسة", 600, 400),
    r("13", "Tlemcen", "تلمسان", 500, 300),
    r("14", "Tiaret", "تيارت", 500, 300),
    r("15", "Tizi Ouzou", "تيزي وزو", 400, 250),
    r("16", "Alger", "الجزائر", 300, 150),
    r("17", "Djelfa", "الجلفة", 600, 400),
    r("18", "Jijel", "جيجل", 500, 300),
    r("19", "Sétif", "سطيف", 450, 250),
    r("20", "Saïda", "سعيدة", 550, 350),
    r("21", "Skikda", "سكيكدة", 500, 300),
    r("22", "Sidi Bel Abbès", "سيدي بلعباس", 500, 300),
    r("23", "Annaba", "عنابة", 500, 300),
    r("24", "Guelma", "قالمة", 550, 350),
    r("25", "Constantine", "قسنطينة", 450, 250),
    r("26", "Médéa", "المدية", 400, 250),
    r("27", "Mostaganem", "مستغانم", 450, 250),
    r("28", "M'Sila", "المسيلة", 550, 350),
    r("29", "Mascara", "معسكر", 500, 300),
    r("30", "Ouargla", "ورقلة", 700, 450),
    r("31", "Oran", "وهران", 400, 200),
    r("32", "El Bayadh", "البيض", 700, 450),
    r("33", "Illizi", "إليزي", 1400, 900),
    r("34", "Bordj Bou Arreridj", "برج بوعريريج", 450, 250),
    r("35", "Boumerdès", "بومرداس", 350, 200),
    r("36", "El Tarf", "الطارف", 600, 400),
    r("37", "Tindouf", "تندوف", 1400, 900),
    r("38", "Tissemsilt", "تيسمسيلت", 550, 350),
    r("39", "El Oued", "الوادي", 700, 450),
    r("40", "Khenchela", "خنشلة", 600, 400),
    r("41", "Souk Ahras", "سوق أهراس", 600, 400),
    r("42", "Tipaza", "تيبازة", 350, 200),
    r("43", "Mila", "ميلة", 500, 300),
    r("44", "Aïn Defla", "عين الدفلى", 450, 250),
    r("45", "Naâma", "النعامة", 700, 450),
    r("46", "Aïn Témouchent", "عين تموشنت", 500, 300),
    r("47", "Ghardaïa", "غرداية", 700, 450),
    r("48", "Relizane", "غليزان", 500, 300),
    r("49", "Timimoun", "تيميمون", 1000, 650),
    r("50", "Bordj Badji Mokhtar", "برج باجي مختار", 1600, 1000),
    r("51", "Ouled Djellal", "أولاد جلال", 650, 400),
    r("52", "Béni Abbès", "بني عباس", 900, 600),
    r("53", "In Salah", "عين صالح", 1200, 800),
    r("54", "In Guezzam", "عين قزام", 1600, 1000),
    r("55", "Touggourt", "تقرت", 700, 450),
    r("56", "Djanet", "جانت", 1400, 900),
    r("57", "El M'Ghair", "المغير", 700, 450),
    r("58", "El Meniaa", "المنيعة", 800, 500),
];
