// Sample passages shared by detection tests.

/// First-person narrative with contractions and varied punctuation.
pub const HUMAN_SAMPLE: &str = "I'll be honest: I didn't expect the trip to go sideways so fast. We'd packed the car the \
    night before, and my brother insisted we leave at five. Five! I grumbled, but I got up \
    anyway. The first hour was fine. Then the tire blew out near a gas station that looked \
    like it hadn't seen a customer since 1987. My brother swore; I laughed so hard I nearly \
    cried. We didn't have a proper jack, just a rusty thing from our dad's garage, so I walked \
    inside to ask for help. The guy behind the counter (his name tag said Earl) shrugged and \
    said he'd \"take a look in a bit.\" A bit turned into two hours. I bought terrible coffee, a \
    bag of stale pretzels, and a postcard I'll never send. My phone died. Honestly? It was \
    kind of great. I sat on the curb and watched trucks roll by, and I thought about how \
    rarely I just sit anywhere without scrolling. When Earl finally came out, he fixed the \
    tire in ten minutes flat and wouldn't take our money. I tried to push a twenty into his \
    hand; he waved me off and told me to drive safe. We made it to the lake around dinner \
    time. The cabin smelled like cedar and old smoke, and my brother fell asleep on the couch \
    before we'd even unpacked. I went down to the dock alone. The water was black and still, \
    and I could hear frogs somewhere I couldn't see. I'm not sure why, but I started thinking \
    about Earl again, about that lonely station and his slow, careful hands. I don't know if \
    I'll ever pass that way again. Maybe I will. Maybe next summer I'll stop in, buy another \
    awful coffee, and say thanks properly. It's funny what sticks with you. Not the lake, not \
    the cabin, but a stranger who didn't rush.";

/// Uniform, connective-heavy, impersonal expository prose.
pub const AI_SAMPLE: &str = "Artificial intelligence has significantly transformed the modern business landscape in \
    recent years. Furthermore, organizations are increasingly adopting automated systems to \
    improve operational efficiency. These technologies are designed to analyze large volumes \
    of data with remarkable accuracy. Moreover, the integration of machine learning enables \
    companies to identify valuable patterns and trends. Consequently, decision makers are able \
    to develop more effective strategies for sustainable growth. However, the implementation \
    of these systems also presents several important challenges. Data privacy is considered a \
    critical concern for many organizations and their customers. Additionally, the deployment \
    of advanced algorithms requires substantial investment in infrastructure. Therefore, \
    organizations must carefully evaluate the potential benefits and risks of adoption. In \
    addition, employees should be provided with comprehensive training to ensure successful \
    integration. Furthermore, regulatory frameworks are being developed to address ethical \
    considerations in this domain. These frameworks are intended to promote transparency, \
    accountability, and fairness in automated decisions. Moreover, collaboration between \
    industry and government is essential for responsible innovation. As a result, stakeholders \
    are encouraged to establish clear guidelines for the use of technology. Consequently, \
    public trust in artificial intelligence can be strengthened over time. However, it is \
    important to recognize that technology alone cannot solve every problem. Human oversight \
    remains a fundamental component of effective and responsible implementation. Therefore, \
    organizations should maintain a balanced approach that combines automation with human \
    expertise. In conclusion, artificial intelligence offers significant opportunities for \
    innovation and growth. Furthermore, its successful adoption depends on careful planning \
    and thoughtful governance. Additionally, continuous evaluation is required to ensure that \
    these systems remain effective. Ultimately, the future of business will be shaped by the \
    responsible integration of intelligent technologies. Moreover, these technologies are \
    expected to influence education, healthcare, and public administration. Consequently, \
    thoughtful leadership is required to guide this transformation responsibly.";

/// Exactly fifty characters of generic prose.
pub const MIN_LENGTH_SAMPLE: &str = "The weather today is mild and the streets are calm";
