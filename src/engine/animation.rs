//! Animation plans.
//!
//! An animated activity yields a finite, play-once sequence of named
//! frame assets, each held for a fixed interval. The engine only names
//! the frames; the presentation layer owns what a frame looks like and
//! when to show it, so nothing here blocks or sleeps.

use std::time::Duration;

use crate::engine::rules::Activity;

/// Default hold interval per frame (the pet's native animation pace).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(250);

/// Named sprite frames the presentation layer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAsset {
    Idle,
    BatheSplash,
    BatheScrub,
    FeedBowl,
    FeedBite,
    LoveGaze,
    LoveNuzzle,
    LoveCurl,
    PlayDribble,
    PlayShoot,
    SleepYawn,
    SleepCurl,
    SleepDream,
}

/// One animation step: which sprite to show and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub asset: FrameAsset,
    pub hold: Duration,
}

/// A finite, non-restartable frame sequence. Consuming it is the only
/// way through; there is no rewind or cancellation.
#[derive(Debug)]
pub struct FrameSeq {
    frames: std::vec::IntoIter<Frame>,
}

impl FrameSeq {
    fn new(assets: Vec<FrameAsset>, hold: Duration) -> Self {
        let frames: Vec<Frame> = assets
            .into_iter()
            .map(|asset| Frame { asset, hold })
            .collect();
        Self {
            frames: frames.into_iter(),
        }
    }

    /// Frames not yet consumed.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl Iterator for FrameSeq {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.frames.next()
    }
}

/// Build the frame plan for an activity's animated branch.
///
/// The loving sequence passes back through the idle sprite on every
/// repeat; the others hold their action sprites until the sequence
/// ends and the presentation layer resets to idle.
pub fn frames_for(activity: Activity, hold: Duration) -> FrameSeq {
    use FrameAsset::*;

    let assets = match activity {
        Activity::Bathe => repeat_cycle(&[BatheSplash, BatheScrub], 4),
        Activity::Feed => repeat_cycle(&[FeedBowl, FeedBite], 4),
        Activity::Love => repeat_cycle(&[LoveGaze, LoveNuzzle, LoveCurl, Idle], 2),
        Activity::Play => repeat_cycle(&[PlayDribble, PlayShoot], 4),
        Activity::Sleep => repeat_cycle(&[SleepYawn, SleepCurl, SleepDream], 4),
    };
    FrameSeq::new(assets, hold)
}

fn repeat_cycle(pattern: &[FrameAsset], times: usize) -> Vec<FrameAsset> {
    let mut assets = Vec::with_capacity(pattern.len() * times);
    for _ in 0..times {
        assets.extend_from_slice(pattern);
    }
    assets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_counts_per_activity() {
        let hold = DEFAULT_FRAME_INTERVAL;
        assert_eq!(frames_for(Activity::Bathe, hold).remaining(), 8);
        assert_eq!(frames_for(Activity::Feed, hold).remaining(), 8);
        assert_eq!(frames_for(Activity::Love, hold).remaining(), 8);
        assert_eq!(frames_for(Activity::Play, hold).remaining(), 8);
        assert_eq!(frames_for(Activity::Sleep, hold).remaining(), 12);
    }

    #[test]
    fn test_bathe_alternates_splash_and_scrub() {
        let assets: Vec<FrameAsset> = frames_for(Activity::Bathe, DEFAULT_FRAME_INTERVAL)
            .map(|f| f.asset)
            .collect();
        assert_eq!(
            assets,
            vec![
                FrameAsset::BatheSplash,
                FrameAsset::BatheScrub,
                FrameAsset::BatheSplash,
                FrameAsset::BatheScrub,
                FrameAsset::BatheSplash,
                FrameAsset::BatheScrub,
                FrameAsset::BatheSplash,
                FrameAsset::BatheScrub,
            ]
        );
    }

    #[test]
    fn test_love_passes_back_through_idle() {
        let assets: Vec<FrameAsset> = frames_for(Activity::Love, DEFAULT_FRAME_INTERVAL)
            .map(|f| f.asset)
            .collect();
        assert_eq!(assets[3], FrameAsset::Idle);
        assert_eq!(assets[7], FrameAsset::Idle);
    }

    #[test]
    fn test_every_frame_carries_the_hold_interval() {
        let hold = Duration::from_millis(100);
        for frame in frames_for(Activity::Sleep, hold) {
            assert_eq!(frame.hold, hold);
        }
    }

    #[test]
    fn test_sequence_is_not_restartable() {
        let mut seq = frames_for(Activity::Play, DEFAULT_FRAME_INTERVAL);
        while seq.next().is_some() {}
        assert_eq!(seq.remaining(), 0);
        assert!(seq.next().is_none());
    }
}
