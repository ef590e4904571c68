extern crate chrono;

use crate::schedule;
use crate::slack;
use crate::stations;

// The feed's formatted times carry no date or zone, so a delay that crosses
// midnight computes a bogus delta. Known limitation, left as-is.
const CLOCK_FORMAT: &str = "%I:%M %p";

pub fn format_arrival(stop: &schedule::ScheduledStop) -> String {
    let scheduled_time = &stop.formatted_train_movement_time;
    let scheduled = match chrono::NaiveTime::parse_from_str(scheduled_time, CLOCK_FORMAT) {
        Ok(t) => t,
        Err(_) => return scheduled_time.to_string(),
    };

    let expected_time = &stop.formatted_calc_train_movement_time;
    let expected = match chrono::NaiveTime::parse_from_str(expected_time, CLOCK_FORMAT) {
        Ok(t) => t,
        Err(_) => return scheduled_time.to_string(),
    };

    let schedule_diff = expected.signed_duration_since(scheduled).num_minutes();

    if schedule_diff != 0 {
        return format!("*{} ({})*", expected_time, schedule_diff);
    }

    return scheduled_time.to_string();
}

pub fn process_station(station: &str, stops: &[schedule::ScheduledStop], directory: &stations::Directory, filter_on_time: bool) -> slack::SlackMessage {
    let mut attachments = vec![];

    for stop in stops {
        let severity = directory.severity(&stop.calculated_status);
        let include = !filter_on_time || severity != "good";

        if stop.platform_name == station && include {
            attachments.push(slack::Attachment{
                text: format!("{:<17} {:<2} {:<6} {} on {}",
                    format_arrival(stop),
                    directory.line_label(&stop.route_code),
                    stop.train_designation,
                    stop.train_destination,
                    stop.formatted_track_designation,
                ),
                color: severity.to_string(),
                mrkdwn_in: vec!["text".to_string()],
            });
        }
    }

    if attachments.len() == 0 {
        attachments.push(slack::Attachment{
            text: "Trains are on time.".to_string(),
            color: "".to_string(),
            mrkdwn_in: vec![],
        });
    }

    return slack::SlackMessage{
        text: format!("{} Station - Scheduled Trains", directory.station_name(station)),
        attachments: attachments,
    };
}

#[cfg(test)]
mod tests {
    use crate::schedule::ScheduledStop;
    use crate::stations::Directory;

    fn make_stop(platform: &str, status: &str) -> ScheduledStop {
        return ScheduledStop{
            train_designation: "100".to_string(),
            route_code: "VC LINE".to_string(),
            train_destination: "Los Angeles".to_string(),
            platform_name: platform.to_string(),
            event_type: "A".to_string(),
            train_movement_time: "2018-06-01T15:00:00".to_string(),
            calc_train_movement_time: "2018-06-01T15:00:00".to_string(),
            formatted_train_movement_time: "3:00 PM".to_string(),
            formatted_calc_train_movement_time: "3:00 PM".to_string(),
            formatted_track_designation: "Track 4A".to_string(),
            calculated_status: status.to_string(),
            ptc_status: "ENABLED".to_string(),
        };
    }

    #[test]
    fn arrival_on_time_is_plain() {
        let stop = make_stop("LAUS", "ON TIME");
        assert_eq!("3:00 PM", super::format_arrival(&stop));
    }

    #[test]
    fn arrival_late_gets_markup_and_delta() {
        let mut stop = make_stop("LAUS", "DELAYED");
        stop.formatted_calc_train_movement_time = "3:05 PM".to_string();
        assert_eq!("*3:05 PM (5)*", super::format_arrival(&stop));
    }

    #[test]
    fn arrival_early_gets_negative_delta() {
        let mut stop = make_stop("LAUS", "ON TIME");
        stop.formatted_calc_train_movement_time = "2:58 PM".to_string();
        assert_eq!("*2:58 PM (-2)*", super::format_arrival(&stop));
    }

    #[test]
    fn unparseable_scheduled_time_passes_through() {
        let mut stop = make_stop("LAUS", "ON TIME");
        stop.formatted_train_movement_time = "".to_string();
        assert_eq!("", super::format_arrival(&stop));

        stop.formatted_train_movement_time = "whenever".to_string();
        assert_eq!("whenever", super::format_arrival(&stop));
    }

    #[test]
    fn unparseable_expected_time_falls_back_to_scheduled() {
        let mut stop = make_stop("LAUS", "DELAYED");
        stop.formatted_calc_train_movement_time = "".to_string();
        assert_eq!("3:00 PM", super::format_arrival(&stop));
    }

    #[test]
    fn on_time_stops_are_filtered_out() {
        let directory = Directory::new();
        let stops = vec![make_stop("LAUS", "ON TIME")];

        let message = super::process_station("LAUS", &stops, &directory, true);

        assert_eq!(1, message.attachments.len());
        assert_eq!("Trains are on time.", message.attachments[0].text);
        assert_eq!("", message.attachments[0].color);
    }

    #[test]
    fn filter_disabled_keeps_on_time_stops() {
        let directory = Directory::new();
        let stops = vec![make_stop("LAUS", "ON TIME")];

        let message = super::process_station("LAUS", &stops, &directory, false);

        assert_eq!(1, message.attachments.len());
        assert_eq!("good", message.attachments[0].color);
        assert!(message.attachments[0].text.starts_with("3:00 PM"));
    }

    #[test]
    fn other_platforms_never_appear() {
        let directory = Directory::new();
        let stops = vec![
            make_stop("GLENDALE", "DELAYED"),
            make_stop("BURBANK-AIRPORT-NORTH", "CANCELLED"),
        ];

        let message = super::process_station("LAUS", &stops, &directory, true);

        assert_eq!(1, message.attachments.len());
        assert_eq!("Trains are on time.", message.attachments[0].text);
    }

    #[test]
    fn delayed_stop_formats_full_line() {
        let directory = Directory::new();
        let mut stop = make_stop("LAUS", "DELAYED");
        stop.formatted_calc_train_movement_time = "3:05 PM".to_string();

        let message = super::process_station("LAUS", &[stop], &directory, true);

        assert_eq!("L.A. Union Station Station - Scheduled Trains", message.text);
        assert_eq!(1, message.attachments.len());
        assert_eq!("warning", message.attachments[0].color);
        assert_eq!(
            "*3:05 PM (5)*     VT 100    Los Angeles on Track 4A",
            message.attachments[0].text);
        assert_eq!(vec!["text".to_string()], message.attachments[0].mrkdwn_in);
    }

    #[test]
    fn unknown_status_is_kept_with_empty_color() {
        let directory = Directory::new();
        let stops = vec![make_stop("LAUS", "SIDEWAYS")];

        let message = super::process_station("LAUS", &stops, &directory, true);

        assert_eq!(1, message.attachments.len());
        assert_eq!("", message.attachments[0].color);
        assert!(message.attachments[0].text.contains("100"));
    }

    #[test]
    fn unknown_station_yields_empty_title() {
        let directory = Directory::new();

        let message = super::process_station("NOT-A-STATION", &[], &directory, true);

        assert_eq!(" Station - Scheduled Trains", message.text);
        assert_eq!(1, message.attachments.len());
        assert_eq!("Trains are on time.", message.attachments[0].text);
    }

    #[test]
    fn output_follows_feed_order() {
        let directory = Directory::new();
        let mut first = make_stop("LAUS", "DELAYED");
        first.train_designation = "100".to_string();
        let mut second = make_stop("LAUS", "CANCELLED");
        second.train_designation = "207".to_string();

        let message = super::process_station("LAUS", &[first, second], &directory, true);

        assert_eq!(2, message.attachments.len());
        assert!(message.attachments[0].text.contains("100"));
        assert!(message.attachments[1].text.contains("207"));
    }
}
