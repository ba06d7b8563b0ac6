//! ASCII sprites for the pet panel.
//!
//! One sprite per frame asset. The engine animates by naming assets;
//! this is the only place that knows what they look like.

use crate::engine::FrameAsset;

/// Look up the sprite for a frame asset.
pub fn sprite(asset: FrameAsset) -> &'static str {
    match asset {
        FrameAsset::Idle => IDLE,
        FrameAsset::BatheSplash => BATHE_SPLASH,
        FrameAsset::BatheScrub => BATHE_SCRUB,
        FrameAsset::FeedBowl => FEED_BOWL,
        FrameAsset::FeedBite => FEED_BITE,
        FrameAsset::LoveGaze => LOVE_GAZE,
        FrameAsset::LoveNuzzle => LOVE_NUZZLE,
        FrameAsset::LoveCurl => LOVE_CURL,
        FrameAsset::PlayDribble => PLAY_DRIBBLE,
        FrameAsset::PlayShoot => PLAY_SHOOT,
        FrameAsset::SleepYawn => SLEEP_YAWN,
        FrameAsset::SleepCurl => SLEEP_CURL,
        FrameAsset::SleepDream => SLEEP_DREAM,
    }
}

const IDLE: &str = r#"
     ,-~~-~~-~~-~~-,
    { \/\/\/\/\/\/\ }
   {  \/\/\/\/\/\/\  }___
   {  /\/\/\/\/\/\/  } o ,
    { /\/\/\/\/\/\/ }_`--'
     `~-__-__-__-__-~ `` ``
"#;

const BATHE_SPLASH: &str = r#"
      o  O   o   O  o
     ,-~~-~~-~~-~~-,
    { \/\/\/\/\/\/\ }___
   {  /\/\/\/\/\/\/  } o ,
  ~~{ /\/\/\/\/\/\/ }_`--'~~
  ~~~~~~~~~~~~~~~~~~~~~~~~~~
"#;

const BATHE_SCRUB: &str = r#"
       O o . [=] . o O
     ,-~~-~~-~~-~~-,
    { ////////////\ }___
   {  \\\\\\\\\\\\/  } o ,
  ~~{ /\/\/\/\/\/\/ }_`--'~~
  ~~~~~~~~~~~~~~~~~~~~~~~~~~
"#;

const FEED_BOWL: &str = r#"
     ,-~~-~~-~~-~~-,
    { \/\/\/\/\/\/\ }
   {  \/\/\/\/\/\/\  }___
   {  /\/\/\/\/\/\/  } o ,
    { /\/\/\/\/\/\/ }_`--'
     `~-__-__-__-__-~ (____)
"#;

const FEED_BITE: &str = r#"
     ,-~~-~~-~~-~~-,
    { \/\/\/\/\/\/\ }
   {  \/\/\/\/\/\/\  }___
   {  /\/\/\/\/\/\/  } o O
    { /\/\/\/\/\/\/ }_`-nom
     `~-__-__-__-__-~ (_.._)
"#;

const LOVE_GAZE: &str = r#"
                      <3
     ,-~~-~~-~~-~~-,
    { \/\/\/\/\/\/\ }___
   {  /\/\/\/\/\/\/  } ^ ,
    { /\/\/\/\/\/\/ }_`--'
     `~-__-__-__-__-~ `` ``
"#;

const LOVE_NUZZLE: &str = r#"
              <3    <3
     ,-~~-~~-~~-~~-,
    { \/\/\/\/\/\/\ }___
   {  /\/\/\/\/\/\/  } ^ ,
    { /\/\/\/\/\/\/ }_`--'
     `~-__-__-__-__-~ `` ``
"#;

const LOVE_CURL: &str = r#"
        <3   <3   <3   <3
     ,-~~-~~-~~-~~-,
    { \/\/\/\/\/\/\ }___
   {  /\/\/\/\/\/\/  } ^ ,
    { /\/\/\/\/\/\/ }_`--'
     `~-__-__-__-__-~ `` ``
"#;

const PLAY_DRIBBLE: &str = r#"
     ,-~~-~~-~~-~~-,
    { \/\/\/\/\/\/\ }
   {  \/\/\/\/\/\/\  }___
   {  /\/\/\/\/\/\/  } o ,
    { /\/\/\/\/\/\/ }_`--'
     `~-__-__-__-__-~  (())
"#;

const PLAY_SHOOT: &str = r#"
                     (())
     ,-~~-~~-~~-~~-,  /
    { \/\/\/\/\/\/\ }___
   {  /\/\/\/\/\/\/  } o !
    { /\/\/\/\/\/\/ }_`--'
     `~-__-__-__-__-~ `` ``
"#;

const SLEEP_YAWN: &str = r#"
                        z
     ,-~~-~~-~~-~~-,
    { \/\/\/\/\/\/\ }___
   {  /\/\/\/\/\/\/  } - o
    { /\/\/\/\/\/\/ }_`--'
     `~-__-__-__-__-~ `` ``
"#;

const SLEEP_CURL: &str = r#"
                      z Z
     ,-~~-~~-~~-~~-,
    { \/\/\/\/\/\/\ }___
   {  /\/\/\/\/\/\/  } - ,
    { /\/\/\/\/\/\/ }_`--'
     `~-__-__-__-__-~ `` ``
"#;

const SLEEP_DREAM: &str = r#"
                    z Z Z
     ,-~~-~~-~~-~~-,
    { \/\/\/\/\/\/\ }___
   {  /\/\/\/\/\/\/  } - ,
    { /\/\/\/\/\/\/ }_`--'
     `~-__-__-__-__-~ `` ``
"#;
