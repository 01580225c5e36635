/// Principal communes of each wilaya, keyed by region code.
pub(super) const CITIES: &[(&str, &[&str])] = &[
    ("01", &["Adrar", "Reggane", "Aoulef", "Tsabit", "Zaouiet Kounta"]),
    ("02", &["Chlef", "Ténès", "Boukadir", "Oued Fodda"]),
    ("03", &["Laghouat", "Aflou", "Ksar El Hirane"]),
    ("04", &["Oum El Bouaghi", "Aïn Beïda", "Aïn M'lila"]),
    ("05", &["Batna", "Barika", "Arris", "Merouana"]),
    ("06", &["Béjaïa", "Akbou", "Kherrata", "Amizour"]),
    ("07", &["Biskra", "Tolga", "Sidi Okba"]),
    ("08", &["Béchar", "Kenadsa", "Abadla"]),
    ("09", &["Blida", "Boufarik", "El Affroun", "Mouzaïa"]),
    ("10", &["Bouira", "Lakhdaria", "Sour El Ghozlane", "M'Chedallah"]),
    ("11", &["Tamanrasset", "Abalessa", "Tazrouk"]),
    ("12", &["Tébessa", "Bir El Ater", "Cheria"]),
    ("13", &["Tlemcen", "Maghnia", "Remchi", "Ghazaouet"]),
    ("14", &["Tiaret", "Sougueur", "Frenda", "Ksar Chellala"]),
    ("15", &["Tizi Ouzou", "Azazga", "Draâ Ben Khedda", "Tigzirt"]),
    (
        "16",
        &[
            "Alger Centre",
            "Bab El Oued",
            "El Harrach",
            "Dar El Beïda",
            "Hussein Dey",
            "Rouiba",
        ],
    ),
    ("17", &["Djelfa", "Messaad", "Aïn Oussera", "Hassi Bahbah"]),
    ("18", &["Jijel", "Taher", "El Milia"]),
    ("19", &["Sétif", "El Eulma", "Aïn Oulmene", "Bougaa"]),
    ("20", &["Saïda", "El Hassasna", "Aïn El Hadjar"]),
    ("21", &["Skikda", "Azzaba", "Collo", "El Harrouch"]),
    ("22", &["Sidi Bel Abbès", "Telagh", "Sfisef"]),
    ("23", &["Annaba", "El Bouni", "El Hadjar", "Berrahal"]),
    ("24", &["Guelma", "Oued Zenati", "Bouchegouf"]),
    (
        "25",
        &[
            "Constantine",
            "El Khroub",
            "Hamma Bouziane",
            "Didouche Mourad",
            "Zighoud Youcef",
        ],
    ),
    ("26", &["Médéa", "Berrouaghia", "Ksar El Boukhari", "Tablat"]),
    ("27", &["Mostaganem", "Hassi Mameche", "Aïn Tédelès", "Mesra"]),
    ("28", &["M'Sila", "Bou Saâda", "Sidi Aïssa", "Magra"]),
    ("29", &["Mascara", "Mohammadia", "Sig", "Tighennif"]),
    ("30", &["Ouargla", "Hassi Messaoud", "Rouissat", "N'Goussa"]),
    ("31", &["Oran", "Es Sénia", "Bir El Djir", "Arzew", "Aïn El Turk"]),
    ("32", &["El Bayadh", "Bougtoub", "Brezina"]),
    ("33", &["Illizi", "In Aménas", "Bordj Omar Driss"]),
    ("34", &["Bordj Bou Arreridj", "Ras El Oued", "Medjana", "El Achir"]),
    ("35", &["Boumerdès", "Boudouaou", "Bordj Menaïel", "Dellys", "Thénia"]),
    ("36", &["El Tarf", "El Kala", "Dréan", "Besbes"]),
    ("37", &["Tindouf", "Oum El Assel"]),
    ("38", &["Tissemsilt", "Theniet El Had", "Bordj Bounaama"]),
    ("39", &["El Oued", "Guemar", "Debila", "Robbah"]),
    ("40", &["Khenchela", "Kais", "Chechar"]),
    ("41", &["Souk Ahras", "Sedrata", "M'daourouch"]),
    ("42", &["Tipaza", "Koléa", "Cherchell", "Hadjout", "Fouka"]),
    ("43", &["Mila", "Chelghoum Laïd", "Ferdjioua", "Grarem Gouga"]),
    ("44", &["Aïn Defla", "Khemis Miliana", "El Attaf", "Miliana"]),
    ("45", &["Naâma", "Mécheria", "Aïn Sefra"]),
    ("46", &["Aïn Témouchent", "Hammam Bou Hadjar", "Beni Saf", "El Malah"]),
    ("47", &["Ghardaïa", "Metlili", "El Guerrara", "Berriane"]),
    ("48", &["Relizane", "Oued Rhiou", "Mazouna", "Zemmora"]),
    ("49", &["Timimoun", "Charouine", "Aougrout"]),
    ("50", &["Bordj Badji Mokhtar", "Timiaouine"]),
    ("51", &["Ouled Djellal", "Sidi Khaled", "Doucen"]),
    ("52", &["Béni Abbès", "Igli", "Kerzaz"]),
    ("53", &["In Salah", "Foggaret Ezzaouia", "In Ghar"]),
    ("54", &["In Guezzam", "Tin Zaouatine"]),
    ("55", &["Touggourt", "Témacine", "Megarine", "Nezla"]),
    ("56", &["Djanet", "Bordj El Haouas"]),
    ("57", &["El M'Ghair", "Djamaa", "Sidi Amrane"]),
    ("58", &["El Meniaa", "Hassi Gara", "Hassi Fehal"]),
];
