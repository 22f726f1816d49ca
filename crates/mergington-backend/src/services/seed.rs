//! The activities offered at Mergington High School when the service starts.

use mergington::data::Activity;

pub fn catalog() -> Vec<(&'static str, Activity)> {
    vec![
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Competitive basketball training and inter-school games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["alex@mergington.edu"]),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Learn tennis skills and play in friendly matches",
                "Wednesdays and Saturdays, 3:00 PM - 5:00 PM",
                10,
            )
            .with_participants(["sarah@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["mia@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct and produce school plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Science Club",
            Activity::new(
                "Run hands-on experiments and prepare science fair projects",
                "Fridays, 3:00 PM - 4:30 PM",
                18,
            )
            .with_participants(["ethan@mergington.edu"]),
        ),
    ]
}
