extern crate reqwest;
extern crate serde;
extern crate serde_json;

use crate::result;

const STATION_SCHEDULE_URL: &str =
    "https://rtt.metrolinktrains.com/CIS/LiveTrainMap/JSON/StationScheduleList.json";

// One scheduled train event at one platform, exactly as the feed spells it.
// PlatformName is the join key to a station code.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduledStop {
    pub train_designation: String,
    pub route_code: String,
    pub train_destination: String,
    pub platform_name: String,
    pub event_type: String,
    pub train_movement_time: String,
    pub calc_train_movement_time: String,
    pub formatted_train_movement_time: String,
    pub formatted_calc_train_movement_time: String,
    pub formatted_track_designation: String,
    pub calculated_status: String,
    #[serde(rename = "PTCStatus")]
    pub ptc_status: String,
}

pub fn load_schedule() -> result::MetroResult<Vec<ScheduledStop>> {
    return load_schedule_ext(real_fetch_json_fn);
}

fn load_schedule_ext(fetch_json_fn: fn(&str) -> result::MetroResult<String>) -> result::MetroResult<Vec<ScheduledStop>> {
    let raw_json = fetch_json_fn(STATION_SCHEDULE_URL)?;
    let stops: Vec<ScheduledStop> = serde_json::from_str(&raw_json)?;
    return Ok(stops);
}

fn real_fetch_json_fn(url: &str) -> result::MetroResult<String> {
    use std::io::Read;

    debug!("Fetching {}", url);
    let mut response = reqwest::blocking::get(url)?;
    let mut response_body = String::new();
    response.read_to_string(&mut response_body)?;
    return Ok(response_body);
}
