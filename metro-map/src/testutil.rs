//! Shared test fixture: a small Moscow metro subset.
//!
//! Lines 3, 4, 5, 6 and 12, reduced to what the tests talk about: the
//! full line-6 run from Новоясеневская to Октябрьская, the Киевская
//! junction on line 4, and the transfers that bound them. The fixture
//! is a JSON payload, so every test that uses it also exercises the
//! loader.

use serde_json::json;

use crate::domain::{LinkId, StationId};
use crate::network::Network;

pub(crate) fn sid(s: &str) -> StationId {
    StationId::parse(s).unwrap()
}

pub(crate) fn lid(s: &str) -> LinkId {
    LinkId::parse(s).unwrap()
}

/// Line 6 from Новоясеневская to Октябрьская, in line order.
pub(crate) fn line6_ids() -> Vec<StationId> {
    [
        "601", "602", "603", "604", "605", "606", "607", "608", "609", "610",
    ]
    .iter()
    .map(|s| sid(s))
    .collect()
}

pub(crate) fn moscow() -> Network {
    Network::from_json_str(&moscow_json()).unwrap()
}

pub(crate) fn moscow_json() -> String {
    json!({
        "stations": {
            // Line 6, Новоясеневская → Октябрьская
            "601": {"name": "Новоясеневская", "lineId": 6, "isTransferStation": true,
                    "linkIds": [601602, 6011201]},
            "602": {"name": "Ясенево", "lineId": 6, "linkIds": [601602, 602603]},
            "603": {"name": "Тёплый Стан", "lineId": 6, "linkIds": [602603, 603604]},
            "604": {"name": "Коньково", "lineId": 6, "linkIds": [603604, 604605]},
            "605": {"name": "Беляево", "lineId": 6, "linkIds": [604605, 605606]},
            "606": {"name": "Калужская", "lineId": 6, "linkIds": [605606, 606607]},
            "607": {"name": "Новые Черёмушки", "lineId": 6, "linkIds": [606607, 607608]},
            "608": {"name": "Профсоюзная", "lineId": 6, "linkIds": [607608, 608609]},
            "609": {"name": "Академическая", "lineId": 6, "linkIds": [608609, 609610]},
            "610": {"name": "Октябрьская", "lineId": 6, "isTransferStation": true,
                    "linkIds": [609610, 610510]},

            // Line 12 stub behind the Новоясеневская transfer
            "1201": {"name": "Битцевский парк", "lineId": 12, "isTransferStation": true,
                     "linkIds": [12011202, 6011201]},
            "1202": {"name": "Лесопарковая", "lineId": 12, "linkIds": [12011202]},

            // Line 5 partners
            "510": {"name": "Октябрьская", "lineId": 5, "isTransferStation": true,
                    "linkIds": [510511, 610510]},
            "511": {"name": "Добрынинская", "lineId": 5, "linkIds": [510511]},
            "501": {"name": "Киевская", "lineId": 5, "isTransferStation": true,
                    "linkIds": [501502, 401501]},
            "502": {"name": "Краснопресненская", "lineId": 5, "linkIds": [501502]},

            // Line 4 with its three-way branch at Киевская
            "401": {"name": "Киевская", "lineId": 4, "isTransferStation": true,
                    "linkIds": [401402, 401403, 401404, 401501, 401301]},
            "402": {"name": "Смоленская", "lineId": 4, "linkIds": [401402]},
            "403": {"name": "Студенческая", "lineId": 4, "linkIds": [401403]},
            "404": {"name": "Выставочная", "lineId": 4, "linkIds": [401404]},

            // Line 3
            "301": {"name": "Киевская", "lineId": 3, "isTransferStation": true,
                    "linkIds": [301302, 401301]},
            "302": {"name": "Смоленская", "lineId": 3, "linkIds": [301302]}
        },
        "links": {
            "601602": {"fromStationId": 601, "toStationId": 602, "type": "link", "weightTime": 2.5},
            "602603": {"fromStationId": 602, "toStationId": 603, "type": "link", "weightTime": 2.5},
            "603604": {"fromStationId": 603, "toStationId": 604, "type": "link", "weightTime": 2.5},
            "604605": {"fromStationId": 604, "toStationId": 605, "type": "link", "weightTime": 2.5},
            "605606": {"fromStationId": 605, "toStationId": 606, "type": "link", "weightTime": 2.5},
            "606607": {"fromStationId": 606, "toStationId": 607, "type": "link", "weightTime": 2.5},
            "607608": {"fromStationId": 607, "toStationId": 608, "type": "link", "weightTime": 2.5},
            "608609": {"fromStationId": 608, "toStationId": 609, "type": "link", "weightTime": 2.5},
            "609610": {"fromStationId": 609, "toStationId": 610, "type": "link", "weightTime": 2.5},

            "12011202": {"fromStationId": 1201, "toStationId": 1202, "type": "link", "weightTime": 2.0},
            "510511": {"fromStationId": 510, "toStationId": 511, "type": "link", "weightTime": 2.0},
            "501502": {"fromStationId": 501, "toStationId": 502, "type": "link", "weightTime": 2.0},
            "401402": {"fromStationId": 401, "toStationId": 402, "type": "link", "weightTime": 2.0},
            "401403": {"fromStationId": 401, "toStationId": 403, "type": "link", "weightTime": 2.0},
            "401404": {"fromStationId": 401, "toStationId": 404, "type": "link", "weightTime": 2.0},
            "301302": {"fromStationId": 301, "toStationId": 302, "type": "link", "weightTime": 2.0},

            "6011201": {"fromStationId": 601, "toStationId": 1201, "type": "transfer", "weightTime": 5.0},
            "610510": {"fromStationId": 610, "toStationId": 510, "type": "transfer", "weightTime": 5.0},
            "401501": {"fromStationId": 401, "toStationId": 501, "type": "transfer", "weightTime": 5.0},
            "401301": {"fromStationId": 401, "toStationId": 301, "type": "transfer", "weightTime": 5.0}
        }
    })
    .to_string()
}
