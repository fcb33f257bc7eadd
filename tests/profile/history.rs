use crate::common;
use serde_json::json;
use zwiftpower_rs::{PowerBests, profile};

#[test]
fn bests_take_the_maximum_of_each_metric() {
    let history = json!({
        "data": [
            {
                "name": "mads hedelund",
                "tname": "DBR",
                "w5": ["1012", 0],
                "w15": [880, 0],
                "w60": ["455", 0],
                "w300": ["330", 0],
                "w1200": ["280", 0],
                "hrmax": ["181", 0]
            },
            {
                "name": "mads hedelund",
                "tname": "DBR",
                "w5": ["990", 0],
                "w15": ["901", 0],
                "w60": [470.6, 0],
                "w300": ["", 0],
                "w1200": ["291W", 0],
                "hrmax": [0, 0]
            },
            { "name": "mads hedelund" }
        ]
    });

    let best = PowerBests::from_history(514_502, &history).unwrap();
    assert_eq!(
        best,
        PowerBests {
            name: "mads hedelund".into(),
            team: "DBR".into(),
            race_count: 3,
            w5: 1012,
            w15: 901,
            w60: 470,
            w300: 330,
            w1200: 291,
            hr_max: 181,
        }
    );
}

#[test]
fn missing_name_falls_back_to_athlete_id() {
    let history = json!({ "data": [ { "w5": ["700", 0] } ] });
    let best = PowerBests::from_history(87_402, &history).unwrap();
    assert_eq!(best.name, "Athlete 87402");
    assert_eq!(best.team, "");
    assert_eq!(best.w5, 700);
}

#[test]
fn no_races_means_no_bests() {
    assert_eq!(PowerBests::from_history(1, &json!({ "data": [] })), None);
    assert_eq!(PowerBests::from_history(1, &json!({})), None);
}

#[tokio::test]
async fn power_bests_are_loaded_from_cached_history() {
    let server = common::setup_server();
    let _site = common::mock_site(&server);
    let history = common::mock_json(
        &server,
        "/cache3/profile/87402_all.json",
        r#"{"data":[{"name":"A Rider","tname":"TEAM","w5":["950",0],"hrmax":["176",0]}]}"#,
    );

    let mut client = common::client_for(&server);
    let best = profile::load_power_bests(&mut client, 87_402)
        .await
        .unwrap()
        .unwrap();

    history.assert();
    assert_eq!(best.name, "A Rider");
    assert_eq!(best.w5, 950);
    assert_eq!(best.hr_max, 176);
}
