//! Built-in trivia bank.
//!
//! Fixed at process start and immutable; sessions sample from it without
//! replacement. Each playthrough asks a random subset, so the bank is kept
//! a little larger than the per-session question count.

use crate::game::question::TriviaQuestion;

const fn q(
    prompt: &'static str,
    choices: [&'static str; 4],
    correct: usize,
) -> TriviaQuestion {
    TriviaQuestion {
        prompt,
        choices,
        correct,
    }
}

pub const QUESTION_BANK: &[TriviaQuestion] = &[
    q("When did Bearableguy123 first post the number 589?", ["February 14, 2018", "December 19, 2019", "March 26, 2023", "Internet meme"], 0),
    q("What does 5 × 8 × 9 equal?", ["589", "360", "985", "Dogecoin fork"], 1),
    q("What is the atomic weight of cobalt?", ["589.00", "58.933", "98.500", "45.679"], 1),
    q("What are Nostro and Vostro accounts used for?", ["Creating NFTs", "Cross-border bank transactions", "Mining Bitcoin", "Gaming leaderboards"], 1),
    q("According to Bearableguy's Loadstar essay, what does 589 represent?", ["A fake prophecy", "Nostro/Vostro accounts unleashed", "A secret wallet address", "IMF restructuring"], 1),
    q("Which date is 58.9% through the year?", ["August 2", "July 22", "September 5", "June 18"], 0),
    q("What file did the SEC release on May 8, 2009?", ["98589", "34-59895", "BG-589", "33-11334"], 1),
    q("Who wrote the National Treasure movie script?", ["David Schwartz", "Charles Segars", "Nicolas Cage", "Jerry Bruckheimer"], 1),
    q("What government role did Charles Segars once hold?", ["CIA director", "White House security consultant", "Federal Reserve advisor", "Homeland archivist"], 1),
    q("What is the name of Benjamin Gates' sidekick?", ["Chris Pool", "Riley Pool", "Parker Ripple", "Billy Bookman"], 1),
    q("What department in the FBI was mentioned in the National Treasure series?", ["Cyber Crimes", "Cryptanalysis", "Behavioral Analysis", "Code Cracking Division"], 1),
    q("What kind of painting is in both Bearableguy's riddle and National Treasure?", ["Storm at sea", "Gold-framed Spanish ship", "Sunset on the Hudson", "British naval battle"], 1),
    q("What iconic movie prop resembled Bearableguy's clock?", ["Illuminati mirror", "National Treasure's gold-revealing wheel", "Declaration vault", "Eye of Providence"], 1),
    q("What rug was discovered in Bearableguy123's Christmas riddle?", ["Moroccan Blue Runner", "Persian Classic Red Medallion", "Ripple Lodge Carpet", "Federal Mint Mat"], 1),
    q("Which Ripple executive posted a GPS image that hinted at Route 123?", ["Brad Garlinghouse", "David Schwartz", "Stuart Alderoty", "Monica Long"], 1),
    q("What suit brand was linked to David Schwartz's ski outfit?", ["Columbia", "Shinesty", "Patagonia", "Mountain Mafia"], 1),
    q("What day did Trump tweet he was a \"stable genius\"?", ["January 6, 2018", "February 9, 2019", "December 12, 2020", "March 1, 2017"], 0),
    q("What was shown in Trump's hand in both riddler tweets and CNBC images?", ["Ripple patent", "XRP logo", "Golden key", "MAGA coin"], 1),
    q("What statue did Trump bring into the Oval Office on Inauguration Day?", ["Teddy Roosevelt bust", "Winston Churchill bust", "The Ripple Flame", "Ronald Reagan figure"], 1),
    q("What XRP-related location is owned by Trump?", ["1600 Pennsylvania Ave", "Ripple headquarters at 315 Montgomery St", "Dubai Trade Zone", "Trump Crypto Tower"], 1),
    q("What phrase did David Schwartz tweet about Bearableguy123 returning?", ["They're real", "They're baaaack!", "The riddler rises", "Can't stop fate"], 1),
    q("What old riddle book mirrors David Schwartz's riddle style?", ["The Great Puzzle Bear", "Bearly-Bearable", "Crypto Bear Code", "Puzzle & Protocol"], 1),
    q("What song lyric did David Schwartz reference before XRP pumped?", ["Bow down before the one you serve", "Trust the system", "When moon meets tide", "Banking on belief"], 0),
    q("What price was XRP when Schwartz posted the \"bow down\" riddle?", ["$0.32", "$0.54", "$1.00", "$0.93"], 1),
    q("Which president was known as the \"Trustbuster\"?", ["Lincoln", "Teddy Roosevelt", "Eisenhower", "Andrew Jackson"], 1),
    q("What movie does David Schwartz often reference in his riddles?", ["The Matrix", "Ghostbusters", "Interstellar", "Fight Club"], 1),
    q("What phrase is Teddy Roosevelt known for?", ["Power flows through control", "Speak softly and carry a big stick", "Drain the system with force", "Manifest ledger"], 1),
    q("What object is in the hand of the bear inside the bear's den riddle?", ["A golden XRP coin", "A hammer", "A riddle scroll", "A compass"], 1),
    q("What book did Brett Baier write?", ["Teddy Roosevelt and the Ghosts of Power", "Teddy Roosevelt and the Birth of a Superpower", "Roosevelt: The Last Riddler", "The Ledger of Liberty"], 1),
    q("What store did David Schwartz tweet about that sells red superhero masks?", ["Hero Outfitters", "Superhero Supply Store", "Teddy Gear Co.", "LedgerWear"], 1),
    q("What was Teddy Roosevelt's greatest achievement according to historians?", ["Founding the Fed", "Building the Panama Canal", "Creating the National Park Service", "Ending WWI"], 1),
    q("What disease did Roosevelt fight during the canal construction?", ["Polio", "Malaria", "Tuberculosis", "Yellow Fever"], 1),
    q("What object does Ripple founder Chris Larsen use to metaphorize payments tech?", ["Rocket ship", "Shipping container", "Digital vault", "Blockchain bridge"], 1),
    q("What bear cartoon appeared before the Federal Reserve was created?", ["The BG Files", "The Roosevelt Bears", "National Bear Code", "Ledger Bears"], 1),
    q("What letters appeared on the elevator in Night at the Museum?", ["XRP589", "BG123", "BGSCH", "MMTDL"], 1),
    q("Who was frozen in the same pose as the BG123 riddle in Night at the Museum?", ["George Washington", "Teddy Roosevelt", "Abraham Lincoln", "Alexander Hamilton"], 1),
    q("What was Ben Stiller's production company logo?", ["A bear holding a cane", "A three-belled jester", "A yellow owl with stars", "A spinning key"], 1),
    q("What phrase appears in the riddle Teddy Roosevelt liked?", ["The world is math", "Perception is power", "The world is a stage", "Truth is structured"], 2),
    q("What was the name of the White House riddle book?", ["The Golden Bear's Code", "Teddy Roosevelt and the Treasure of Ursa Major", "The Owl of Washington", "The Executive Cipher"], 1),
    q("What was the purpose of The Roosevelt Bears' story journey?", ["Visit churches", "Explore cities later used for Federal Reserve banks", "Search for treasure", "Map gold reserves"], 1),
    q("What real-life item may the red BG character represent?", ["A puppet", "A ragdoll", "A voodoo doll", "A paper token"], 2),
    q("What celestial event is being connected to XRP in the video?", ["Solar eclipse", "T Coronae Borealis nova", "Meteor shower", "Venus alignment"], 1),
    q("What phrase is used repeatedly to connect Ripple with global change?", ["Shock the System", "Flip the Ledger", "Ripples of Change", "Digital Avalanche"], 2),
    q("Which UN-backed alliance selected Ripple to help promote digital payments?", ["Better Than Cash Alliance", "Blockchain World Forum", "Tokenized Equity Council", "Decentralized Finance Network"], 0),
];
