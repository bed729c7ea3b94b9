use albumdex_core::{AlbumRepository, Date, Flow, Session};

fn session() -> Session {
    Session::new().with_reference_date(Date::new(2024, 6, 15))
}

fn run(session: &mut Session, line: &str) -> Vec<String> {
    session.handle_line(line).lines
}

#[test]
fn add_reports_added_then_duplicate() {
    let mut session = session();

    assert_eq!(
        run(&mut session, "A,Blue,Joni Mitchell,11/7/1943,pop,6/22/1971"),
        vec!["Blue(Joni Mitchell:11/7/1943) added to the collection."]
    );
    assert_eq!(
        run(&mut session, "A,BLUE,Joni Mitchell,11/7/1943,jazz,1/1/1980"),
        vec!["BLUE(Joni Mitchell:11/7/1943) is already in the collection."]
    );
    assert_eq!(session.service().repository().albums().len(), 1);
}

#[test]
fn add_checks_birthdate_before_release_date() {
    let mut session = session();

    assert_eq!(
        run(&mut session, "A,Blue,Joni Mitchell,2/29/1943,pop,13/1/1971"),
        vec!["Artist DOB: 2/29/1943 is invalid."]
    );
    assert_eq!(
        run(&mut session, "A,Blue,Joni Mitchell,11/7/1943,pop,7/1/2024"),
        vec!["Date Released: 7/1/2024 is invalid."]
    );
    assert_eq!(
        run(&mut session, "A,Blue,Joni Mitchell,1/1/1899,pop,6/22/1971"),
        vec!["Artist DOB: 1/1/1899 is invalid."]
    );
    assert!(session.service().repository().albums().is_empty());
}

#[test]
fn delete_reports_removed_or_missing() {
    let mut session = session();
    run(&mut session, "A,Blue,Joni Mitchell,11/7/1943,pop,6/22/1971");

    assert_eq!(
        run(&mut session, "D,Court and Spark,Joni Mitchell,11/7/1943"),
        vec!["Court and Spark(Joni Mitchell:11/7/1943) is not in the collection"]
    );
    assert_eq!(
        run(&mut session, "D,blue,Joni Mitchell,11/7/1943"),
        vec!["blue(Joni Mitchell:11/7/1943) removed from the collection."]
    );
    assert_eq!(run(&mut session, "PD"), vec!["Collection is empty!"]);
}

#[test]
fn rate_reports_release_date_of_stored_album() {
    let mut session = session();
    run(&mut session, "A,Blue,Joni Mitchell,11/7/1943,pop,6/22/1971");

    assert_eq!(
        run(&mut session, "R,Blue,Joni Mitchell,11/7/1943,4"),
        vec!["You rate 4 for Blue:6/22/1971(Joni Mitchell)"]
    );
    assert_eq!(
        run(&mut session, "R,Blue,Joni Mitchell,11/7/1943,0"),
        vec!["Invalid rating, rating scale is 1 to 5."]
    );
    assert_eq!(
        run(&mut session, "R,Hejira,Joni Mitchell,11/7/1943,5"),
        vec!["Hejira(Joni Mitchell:11/7/1943) is not in the collection"]
    );

    let listing = run(&mut session, "PR");
    assert!(listing[1].ends_with("Rating: *(0)**(0)***(0)****(1)*****(0)(average rating: 4.00)"));
}

#[test]
fn artist_identity_is_case_sensitive_for_lookups() {
    let mut session = session();
    run(&mut session, "A,Blue,Joni Mitchell,11/7/1943,pop,6/22/1971");

    assert_eq!(
        run(&mut session, "D,Blue,joni mitchell,11/7/1943"),
        vec!["Blue(joni mitchell:11/7/1943) is not in the collection"]
    );
}

#[test]
fn malformed_lines_are_invalid_commands() {
    let mut session = session();
    for line in [
        "X",
        "A,Blue,Joni Mitchell,11/7/1943,pop",
        "A,Blue,Joni Mitchell,11-7-1943,pop,6/22/1971",
        "R,Blue,Joni Mitchell,11/7/1943,four",
        "D,Blue,Joni Mitchell",
        "pd",
    ] {
        assert_eq!(run(&mut session, line), vec!["Invalid command!"], "line: {line}");
    }
}

#[test]
fn full_session_transcript() {
    let mut session = session();
    let script = [
        "A,Kind of Blue,Miles Davis,5/26/1926,jazz,8/17/1959",
        "A,Jolene,Dolly Parton,1/19/1946,country,2/4/1974",
        "A,Goldberg Variations,Glenn Gould,9/25/1932,classical,1/1/1956",
        "R,Jolene,Dolly Parton,1/19/1946,5",
        "R,Kind of Blue,Miles Davis,5/26/1926,3",
        "R,Kind of Blue,Miles Davis,5/26/1926,5",
    ];
    for line in script {
        assert_eq!(session.handle_line(line).flow, Flow::Continue);
    }

    assert_eq!(
        run(&mut session, "PR"),
        vec![
            "* Collection sorted by Rating/Title *",
            "[Jolene] Released 2/4/1974 [Dolly Parton:1/19/1946] [Country] Rating: *(0)**(0)***(0)****(0)*****(1)(average rating: 5.00)",
            "[Kind of Blue] Released 8/17/1959 [Miles Davis:5/26/1926] [Jazz] Rating: *(0)**(0)***(1)****(0)*****(1)(average rating: 4.00)",
            "[Goldberg Variations] Released 1/1/1956 [Glenn Gould:9/25/1932] [Classical] Rating: none",
            "* end of list *",
        ]
    );

    let by_genre = run(&mut session, "PG");
    assert!(by_genre[1].starts_with("[Goldberg Variations]"));
    assert!(by_genre[2].starts_with("[Jolene]"));
    assert!(by_genre[3].starts_with("[Kind of Blue]"));

    let by_date = run(&mut session, "PD");
    assert!(by_date[1].starts_with("[Goldberg Variations]"));
    assert!(by_date[2].starts_with("[Kind of Blue]"));
    assert!(by_date[3].starts_with("[Jolene]"));

    let quit = session.handle_line("Q");
    assert_eq!(quit.lines, vec!["Collection Manager terminated."]);
    assert_eq!(quit.flow, Flow::Quit);
}
