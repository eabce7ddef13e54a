//! Built-in entity table.

use crate::entity::Category::{self, AllRounder, Attacker, Defender, Speedster, Support};

/// `(id, name, legacy name, category, image)` in canonical order.
pub(crate) const ENTITIES: &[(u32, &str, &str, Category, &str)] = &[
    (101, "ピカチュウ", "pikachu", Attacker, "/icons/Pikachu.png"),
    (102, "エースバーン", "cinderace", Attacker, "/icons/Cinderace.png"),
    (103, "エーフィ", "espeon", Attacker, "/icons/Espeon.png"),
    (104, "グレイシア", "glaceon", Attacker, "/icons/Glaceon.png"),
    (105, "グレンアルマ", "armarouge", Attacker, "/icons/Armarouge.png"),
    (106, "ゲッコウガ", "greninja", Attacker, "/icons/Greninja.png"),
    (107, "サーナイト", "gardevoir", Attacker, "/icons/Gardevoir.png"),
    (108, "シャンデラ", "chandelure", Attacker, "/icons/Chandelure.png"),
    (109, "ジュナイパー", "decidueye", Attacker, "/icons/Decidueye.png"),
    (110, "ジュラルドン", "duraludon", Attacker, "/icons/Duraludon.png"),
    (111, "ドラパルト", "dragapult", Attacker, "/icons/Dragapult.png"),
    (112, "ニンフィア", "sylveon", Attacker, "/icons/Sylveon.png"),
    (113, "フシギバナ", "venusaur", Attacker, "/icons/Venusaur.png"),
    (114, "マフォクシー", "delphox", Attacker, "/icons/Delphox.png"),
    (115, "ミュウ", "mew", Attacker, "/icons/Mew.png"),
    (116, "ミュウツー(Y)", "mewtwoY", Attacker, "/icons/MewtwoY.png"),
    (117, "ミライドン", "miraidon", Attacker, "/icons/Miraidon.png"),
    (118, "ラティオス", "latios", Attacker, "/icons/Latios.png"),
    (119, "アローラキュウコン", "ninetales", Attacker, "/icons/Ninetales.png"),
    (120, "アローラライチュウ", "raichu", Attacker, "/icons/Raichu.png"),
    (121, "インテレオン", "inteleon", Attacker, "/icons/Inteleon.png"),
    (122, "ウッウ", "cramorant", Attacker, "/icons/Cramorant.png"),
    (201, "イワパレス", "crustle", Defender, "/icons/Crustle.png"),
    (202, "オーロット", "trevenant", Defender, "/icons/Trevenant.png"),
    (203, "カビゴン", "snorlax", Defender, "/icons/Snorlax.png"),
    (204, "カメックス", "blastoise", Defender, "/icons/Blastoise.png"),
    (205, "シャワーズ", "vaporeon", Defender, "/icons/Vaporeon.png"),
    (206, "ヌメルゴン", "goodra", Defender, "/icons/Goodra.png"),
    (207, "ブラッキー", "umbreon", Defender, "/icons/Umbreon.png"),
    (208, "ホウオウ", "hoOh", Defender, "/icons/Ho-Oh.png"),
    (209, "マンムー", "mamoswine", Defender, "/icons/Mamoswine.png"),
    (210, "ヤドラン", "slowbro", Defender, "/icons/Slowbro.png"),
    (211, "ヨクバリス", "greedent", Defender, "/icons/Greedent.png"),
    (212, "ラプラス", "lapras", Defender, "/icons/Lapras.png"),
    (301, "アブソル", "absol", Speedster, "/icons/Absol.png"),
    (302, "ガラルギャロップ", "rapidash", Speedster, "/icons/Rapidash.png"),
    (303, "ゲンガー", "gengar", Speedster, "/icons/Gengar.png"),
    (304, "ゼラオラ", "zeraora", Speedster, "/icons/Zeraora.png"),
    (305, "ゾロアーク", "zoroark", Speedster, "/icons/Zoroark.png"),
    (306, "ダークライ", "darkrai", Speedster, "/icons/Darkrai.png"),
    (307, "ドードリオ", "dodrio", Speedster, "/icons/Dodrio.png"),
    (308, "ニャース", "meowth", Speedster, "/icons/Meowth.png"),
    (309, "ファイアロー", "talonflame", Speedster, "/icons/Talonflame.png"),
    (310, "マスカーニャ", "meowscara", Speedster, "/icons/Meowscarada.png"),
    (311, "リーフィア", "leafeon", Speedster, "/icons/Leafeon.png"),
    (312, "ストライク", "scyther", Speedster, "/icons/Scyther.png"),
    (401, "アマージョ", "tsareena", AllRounder, "/icons/Tsareena.png"),
    (402, "ウーラオス", "urshifu_Single", AllRounder, "/icons/Urshifu.png"),
    (403, "エンペルト", "empoleon", AllRounder, "/icons/Empoleon.png"),
    (404, "カイリキー", "machamp", AllRounder, "/icons/Machamp.png"),
    (405, "カイリュー", "dragonite", AllRounder, "/icons/Dragonite.png"),
    (406, "ガブリアス", "garchomp", AllRounder, "/icons/Garchomp.png"),
    (407, "ギャラドス", "gyarados", AllRounder, "/icons/Gyarados.png"),
    (408, "ギルガルド", "aegislash", AllRounder, "/icons/Aegislash.png"),
    (409, "ザシアン", "zacian", AllRounder, "/icons/Zacian.png"),
    (410, "スイクン", "suicune", AllRounder, "/icons/Suicune.png"),
    (411, "ソウブレイズ", "ceruledge", AllRounder, "/icons/Ceruledge.png"),
    (412, "タイレーツ", "falinks", AllRounder, "/icons/Falinks.png"),
    (413, "ダダリン", "dhelmise", AllRounder, "/icons/Dhelmise.png"),
    (414, "デカヌチャン", "tinkaton", AllRounder, "/icons/Tinkaton.png"),
    (415, "パーモット", "pawmot", AllRounder, "/icons/Pawmot.png"),
    (416, "バシャーモ", "blaziken", AllRounder, "/icons/Blaziken.png"),
    (417, "ハッサム", "scizor", AllRounder, "/icons/Scizor.png"),
    (418, "バンギラス", "tyranitar", AllRounder, "/icons/Tyranitar.png"),
    (419, "マッシブーン", "buzzwole", AllRounder, "/icons/Buzzwole.png"),
    (420, "マリルリ", "azumarill", AllRounder, "/icons/Azumarill.png"),
    (421, "ミミッキュ", "mimikyu", AllRounder, "/icons/Mimikyu.png"),
    (422, "ミュウツー(X)", "mewtwoX", AllRounder, "/icons/MewtwoX.png"),
    (423, "メタグロス", "metagross", AllRounder, "/icons/Metagross.png"),
    (424, "リザードン", "charizard", AllRounder, "/icons/Charizard.png"),
    (425, "ルカリオ", "lucario", AllRounder, "/icons/Lucario.png"),
    (426, "メガルカリオ", "megLucario", AllRounder, "/icons/Mega-Lucario.png"),
    (427, "ネギガナイト", "sirfetch", AllRounder, "/icons/Sirfetchd.png"),
    (428, "メガリザードンX", "megaCharizardX", AllRounder, "/icons/Mega-Charizard-X.png"),
    (429, "メガリザードンY", "megaCharizardY", AllRounder, "/icons/Mega-Charizard-Y.png"),
    (430, "メガギャラドス", "megaGyarados", AllRounder, "/icons/Mega-Gyarados.png"),
    (501, "キュワワー", "comfey", Support, "/icons/Comfey.png"),
    (502, "コダック", "psyduck", Support, "/icons/Psyduck.png"),
    (503, "ハピナス", "blissey", Support, "/icons/Blissey.png"),
    (504, "バリヤード", "mrMime", Support, "/icons/Mr.Mime.png"),
    (505, "ピクシー", "clefable", Support, "/icons/Clefable.png"),
    (506, "フーパ", "hoopa", Support, "/icons/Hoopa.png"),
    (507, "プクリン", "wigglytuff", Support, "/icons/Wigglytuff.png"),
    (508, "マホイップ", "alcremie", Support, "/icons/Alcremie.png"),
    (509, "ヤミラミ", "sableye", Support, "/icons/Sableye.png"),
    (510, "ラティアス", "latias", Support, "/icons/Latias.png"),
    (511, "ワタシラガ", "eldegoss", Support, "/icons/Eldegoss.png"),
];
