//! Fixed catalog data served by the read-only endpoints.

use serde_json::json;

use crate::{About, EventFull, Headquarters, Roadster, RocketFull};

#[derive(Debug, Clone)]
pub struct Catalog {
    pub about: About,
    pub events: Vec<EventFull>,
    pub rockets: Vec<RocketFull>,
    pub roadster: Roadster,
}

impl Catalog {
    pub fn seeded() -> Self {
        Self {
            about: about(),
            events: events(),
            rockets: rockets(),
            roadster: roadster(),
        }
    }
}

fn about() -> About {
    About {
        founder: "Elon Musk".to_string(),
        founded: "2002".to_string(),
        employees: 7000,
        ceo: "Elon Musk".to_string(),
        coo: "Gwynne Shotwell".to_string(),
        cto: "Elon Musk".to_string(),
        valuation: 27_500_000_000.0,
        headquarters: Headquarters {
            address: "Rocket Road".to_string(),
            city: "Hawthorne".to_string(),
            state: "California".to_string(),
        },
        summary: "SpaceX designs, manufactures and launches advanced rockets and spacecraft."
            .to_string(),
    }
}

fn events() -> Vec<EventFull> {
    vec![
        EventFull {
            id: 1,
            title: "Falcon 1 Makes History".to_string(),
            event_date_utc: "2008-09-28T23:15:00Z".to_string(),
            details: "Falcon 1 becomes the first privately developed liquid fuel rocket to reach Earth orbit.".to_string(),
            links: [
                ("reddit".to_string(), None),
                ("article".to_string(), Some("http://www.spacex.com/news/2013/02/11/flight-4-launch-update-0".to_string())),
                ("wikipedia".to_string(), Some("https://en.wikipedia.org/wiki/Falcon_1".to_string())),
            ]
            .into_iter()
            .collect(),
        },
        EventFull {
            id: 2,
            title: "SpaceX Wins $1.6B NASA Contract".to_string(),
            event_date_utc: "2008-12-23T01:00:00Z".to_string(),
            details: "NASA awards SpaceX a $1.6B commercial resupply services contract.".to_string(),
            links: [
                ("reddit".to_string(), None),
                ("article".to_string(), Some("https://www.space.com/6340-nasa-awards-1-6-billion-iss-cargo-contracts.html".to_string())),
                ("wikipedia".to_string(), Some("https://en.wikipedia.org/wiki/Commercial_Resupply_Services".to_string())),
            ]
            .into_iter()
            .collect(),
        },
        EventFull {
            id: 3,
            title: "Falcon Heavy First Launch".to_string(),
            event_date_utc: "2018-02-06T20:45:00Z".to_string(),
            details: "Falcon Heavy lifts off with a Tesla Roadster as its dummy payload.".to_string(),
            links: [
                ("reddit".to_string(), Some("https://www.reddit.com/r/spacex/comments/7vg63x/".to_string())),
                ("article".to_string(), None),
                ("wikipedia".to_string(), Some("https://en.wikipedia.org/wiki/Falcon_Heavy_test_flight".to_string())),
            ]
            .into_iter()
            .collect(),
        },
    ]
}

fn rockets() -> Vec<RocketFull> {
    vec![
        RocketFull {
            rocket_id: 1,
            rocket_name: "Falcon 1".to_string(),
            first_flight: "2006-03-24".to_string(),
            description: "The Falcon 1 was an expendable launch system privately developed and manufactured by SpaceX.".to_string(),
            wikipedia: "https://en.wikipedia.org/wiki/Falcon_1".to_string(),
            flickr_images: vec!["https://imgur.com/DaCfMsj.jpg".to_string()],
            height: json!({ "meters": 22.25, "feet": 73 }),
            diameter: json!({ "meters": 1.68, "feet": 5.5 }),
            mass: json!({ "kg": 30146, "lb": 66460 }),
            engines: json!({ "number": 1, "type": "merlin", "version": "1C" }),
            first_stage: json!({ "reusable": false, "engines": 1, "fuel_amount_tons": 44.3 }),
            second_stage: json!({ "engines": 1, "fuel_amount_tons": 3.38 }),
        },
        RocketFull {
            rocket_id: 2,
            rocket_name: "Falcon 9".to_string(),
            first_flight: "2010-06-04".to_string(),
            description: "Falcon 9 is a two-stage rocket designed and manufactured by SpaceX.".to_string(),
            wikipedia: "https://en.wikipedia.org/wiki/Falcon_9".to_string(),
            flickr_images: vec![
                "https://farm1.staticflickr.com/929/28787338307_3453a11a77_b.jpg".to_string(),
                "https://farm4.staticflickr.com/3955/32915197674_eee74d81bb_b.jpg".to_string(),
            ],
            height: json!({ "meters": 70, "feet": 229.6 }),
            diameter: json!({ "meters": 3.7, "feet": 12 }),
            mass: json!({ "kg": 549054, "lb": 1207920 }),
            engines: json!({ "number": 9, "type": "merlin", "version": "1D+" }),
            first_stage: json!({ "reusable": true, "engines": 9, "fuel_amount_tons": 385 }),
            second_stage: json!({ "engines": 1, "fuel_amount_tons": 90 }),
        },
    ]
}

fn roadster() -> Roadster {
    Roadster {
        name: "Elon Musk's Tesla Roadster".to_string(),
        launch_date_utc: "2018-02-06T20:45:00.000Z".to_string(),
        details: "Elon Musk's Tesla Roadster is an electric sports car that served as the dummy payload for the February 2018 Falcon Heavy test flight.".to_string(),
        earth_distance_km: 92_910_000.5,
        mars_distance_km: 58_000_000.25,
        wikipedia: "https://en.wikipedia.org/wiki/Elon_Musk%27s_Tesla_Roadster".to_string(),
    }
}
