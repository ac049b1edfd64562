use std::rc::Rc;

use super::*;
use crate::remote::fake::{FakeRemote, raw_track};

fn setup() -> (
    Rc<FakeRemote>,
    QueueReconciler<FakeRemote>,
    PlaybackFacade<FakeRemote>,
) {
    let fake = Rc::new(FakeRemote::new());
    let queue = QueueReconciler::new(Rc::clone(&fake), 10);
    let playback = PlaybackFacade::new(Rc::clone(&fake));
    (fake, queue, playback)
}

#[test]
fn toggle_pauses_a_playing_track() {
    let (fake, queue, mut pb) = setup();
    fake.set_playing(raw_track("t1", "Song", "Artist"), true, 1_000);
    assert!(pb.toggle_play_pause(&queue));
    assert_eq!(fake.calls(), vec!["currently_playing", "pause"]);
    // flag mirrors call success, not the new play state
    assert!(pb.is_playing());
}

#[test]
fn toggle_resumes_when_paused_or_idle() {
    let (fake, queue, mut pb) = setup();
    pb.toggle_play_pause(&queue);
    fake.set_playing(raw_track("t1", "Song", "Artist"), false, 1_000);
    pb.toggle_play_pause(&queue);
    assert_eq!(
        fake.calls(),
        vec!["currently_playing", "resume", "currently_playing", "resume"]
    );
}

#[test]
fn failed_pause_is_recorded_as_false() {
    let (fake, queue, mut pb) = setup();
    pb.toggle_play_pause(&queue);
    assert!(pb.is_playing());

    fake.set_playing(raw_track("t1", "Song", "Artist"), true, 1_000);
    fake.reject_commands.set(true);
    assert!(!pb.toggle_play_pause(&queue));
    assert!(!pb.is_playing());
}

#[test]
fn next_pops_exactly_the_local_head() {
    let (_fake, mut queue, mut pb) = setup();
    queue.add_to_queue(&Track::manual("A", "", "", Some("a")));
    queue.add_to_queue(&Track::manual("B", "", "", Some("b")));

    assert!(pb.next_track(&mut queue));
    assert_eq!(queue.local_queue().len(), 1);
    assert_eq!(queue.local_queue()[0].id, "b");
}

#[test]
fn next_with_empty_local_queue_is_fine() {
    let (_fake, mut queue, mut pb) = setup();
    assert!(pb.next_track(&mut queue));
    assert!(queue.local_queue().is_empty());
}

#[test]
fn failed_next_keeps_local_queue() {
    let (fake, mut queue, mut pb) = setup();
    queue.add_to_queue(&Track::manual("A", "", "", None));
    fake.reject_commands.set(true);
    assert!(!pb.next_track(&mut queue));
    assert_eq!(queue.local_queue().len(), 1);
}

#[test]
fn previous_has_no_local_effect() {
    let (fake, mut queue, mut pb) = setup();
    queue.add_to_queue(&Track::manual("A", "", "", None));
    assert!(pb.previous_track());
    assert_eq!(queue.local_queue().len(), 1);
    assert_eq!(fake.calls(), vec!["previous"]);
}

#[test]
fn play_track_requires_an_id() {
    let (fake, _queue, mut pb) = setup();
    assert!(!pb.play_track(&Track::manual("Local", "", "", None)));
    assert!(fake.calls().is_empty());

    assert!(pb.play_track(&Track::manual("Remote", "", "", Some("r1"))));
    assert_eq!(fake.calls(), vec!["play:r1"]);
}
