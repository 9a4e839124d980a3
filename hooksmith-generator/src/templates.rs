//! Opener and follow-up sentence templates.
//!
//! Placeholders are `[outcome]`, `[solution]` and `[personal outcome]`; every
//! candidate hook is one opener paired with one follow-up, word for word.

pub const OPENER_TEMPLATES: &[&str] = &[
    "Here's exactly how to [outcome]. [solution].",
    "Here's exactly how you're gonna [outcome].",
    "Here's the exact 3 step process to [outcome].",
    "Here's the only [solution] that will let you [personal outcome].",
    "Here's the only guide to [solution] you will ever need.",
    "Alright if I was you and I needed to [outcome] really quickly, I'm gonna tell you exactly what I would do. Free sauce.",
    "Everybody that tells you that you don't need to [solution] to [outcome] is lying to you.",
    "If there's one piece of advice about how to [outcome] today, please let it be this.",
    "A lot of people who wanna [outcome] fail to do so because they're not [solution].",
    "Wanna know why most people never [outcome]?",
    "If I was young again and I had to [personal outcome] all over again, this is exactly how I'd do it.",
    "I'm gonna show you exactly how to [outcome] in a very very specific way.",
    "Alright I'm gonna teach you exactly how to [outcome] in one video.",
    "Here's the story of how I accidentally [personal outcome].",
    "In 60 seconds I'm going to logically prove to you how you can literally [outcome].",
    "Here's why you should [solution].",
    "Here's how to [outcome]. [solution].",
    "Here's the ONE [solution] I used to [outcome].",
    "Today, we're gonna be talking about how to [outcome].",
    "Alright this is the single easiest way to [outcome].",
    "If you want to instantly [outcome], this is the ONLY video you will ever need to watch.",
    "Here's exactly how you're gonna [outcome] in 2025. You're gonna [solution].",
    "The easiest way to [outcome] is to [solution].",
    "The way to instantly [outcome] is to simply [solution].",
    "Here's exactly how you're gonna [outcome] in the next 60 seconds.",
    "Here's exactly how I [personal outcome]. I [solution].",
    "It took me 4 years to learn what I'm about to teach you in a minute and a half.",
    "This is the ultimate guide on how to [outcome].",
    "Does [solution] ACTUALLY get you [outcome]?",
    "4 ways to [outcome].",
];

pub const FOLLOW_UP_TEMPLATES: &[&str] = &[
    "And I'm not trying to pat myself on the back here, but just to provide some credibility, I [personal outcome].",
    "That is literally the only thing that's stopping you from [outcome]. And the reason why is because...",
    "I've obsessed over this for the past year of my life, and you probably haven't heard anyone else put it this way. Everyone that has that [outcome] does [solution].",
    "I'll tell you, but you're gonna hate me. The reason is because most people don't [solution]. Hear me out.",
    "If you're wondering why you should listen to me, I [personal outcome].",
    "Okay, so I did exactly that. I [personal outcome], and I wanted to make this video to let you know that it's not as hard as you think.",
    "You're probably thinking, who the hell is this guy and why should I listen to him? Well, I [personal outcome].",
    "This technique I'm about to show you has allowed me to [personal outcome].",
    "It's so simple, but like nobody does it.",
    "Nowadays, there's content about how to [outcome] everywhere.",
    "Now most of you guys make the most common mistake when it comes to [outcome]...",
];
