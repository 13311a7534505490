//! Localized interface strings.

use std::fmt;

/// Interface language for rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Telugu,
    Hindi,
}

/// Static strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub title: &'static str,
    pub about: &'static str,
    pub instructions: &'static str,
    pub default_used: &'static str,
    pub raw_data: &'static str,
    pub sentiment_distribution: &'static str,
    pub word_cloud: &'static str,
    pub score_distribution: &'static str,
    pub no_text_available: &'static str,
}

const ENGLISH: UiText = UiText {
    title: "🧠 AI-Powered Customer Review Analyzer",
    about: "This app analyzes customer reviews using AI sentiment analysis. You can upload your own file or use the sample data provided.",
    instructions: "Please upload a CSV file with a 'Review' column. The app will perform sentiment analysis, generate a word cloud, and show insights.",
    default_used: "No file uploaded. Showing sample reviews below 👇",
    raw_data: "📋 Show Raw Data",
    sentiment_distribution: "📊 Sentiment Distribution",
    word_cloud: "☁️ Word Cloud of Reviews",
    score_distribution: "📈 Sentiment Score Distribution",
    no_text_available: "No review text available for the word cloud.",
};

const TELUGU: UiText = UiText {
    title: "🧠 AI ఆధారిత కస్టమర్ సమీక్ష విశ్లేషణ",
    about: "ఈ యాప్ కస్టమర్ సమీక్షలను ఎయ్ ఐ సెంటిమెంట్ విశ్లేషణతో విశ్లేషిస్తుంది. మీరు మీ ఫైల్‌ను అప్‌లోడ్ చేయవచ్చు లేదా ఉదాహరణ డేటాను ఉపయోగించవచ్చు.",
    instructions: "'Review' కాలమ్ ఉన్న CSV ఫైల్‌ను అప్‌లోడ్ చేయండి. యాప్ సెంటిమెంట్ విశ్లేషణ, వరల్డ్ క్లౌడ్ మరియు గ్రాఫ్‌లను చూపిస్తుంది.",
    default_used: "ఫైల్ అప్‌లోడ్ కాలేదు. ఉదాహరణ సమీక్షలు చూపబడుతున్నాయి 👇",
    raw_data: "📋 అసలు డేటాను చూపించు",
    sentiment_distribution: "📊 భావ విశ్లేషణ గ్రాఫ్",
    word_cloud: "☁️ సమీక్షల వరల్డ్ క్లౌడ్",
    score_distribution: "📈 భావ స్కోర్ పంపిణీ",
    no_text_available: "వరల్డ్ క్లౌడ్ కోసం సమీక్ష టెక్స్ట్ అందుబాటులో లేదు.",
};

const HINDI: UiText = UiText {
    title: "🧠 एआई-आधारित ग्राहक समीक्षा विश्लेषक",
    about: "यह ऐप ग्राहक समीक्षाओं का विश्लेषण एआई सेंटिमेंट एनालिसिस से करता है। आप अपनी फ़ाइल अपलोड कर सकते हैं या सैंपल डेटा का उपयोग कर सकते हैं।",
    instructions: "कृपया एक ऐसी CSV फ़ाइल अपलोड करें जिसमें 'Review' कॉलम हो। ऐप भावना विश्लेषण करेगा और चार्ट दिखाएगा।",
    default_used: "कोई फ़ाइल अपलोड नहीं की गई। नीचे सैंपल समीक्षाएँ दिखाई जा रही हैं 👇",
    raw_data: "📋 कच्चा डेटा दिखाएँ",
    sentiment_distribution: "📊 भावना वितरण",
    word_cloud: "☁️ समीक्षाओं का वर्ड क्लाउड",
    score_distribution: "📈 भावना स्कोर वितरण",
    no_text_available: "वर्ड क्लाउड के लिए कोई समीक्षा पाठ उपलब्ध नहीं है।",
};

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Telugu, Language::Hindi];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Telugu => "Telugu",
            Language::Hindi => "Hindi",
        }
    }

    /// The language's name written in its own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Telugu => "తెలుగు",
            Language::Hindi => "हिन्दी",
        }
    }

    pub fn text(self) -> &'static UiText {
        match self {
            Language::English => &ENGLISH,
            Language::Telugu => &TELUGU,
            Language::Hindi => &HINDI,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
