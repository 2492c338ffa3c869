//! Canned redirect messages returned with warning and critical verdicts.

pub const CRISIS: &str = "\
I'm genuinely concerned about what you're sharing. Your safety is important.

Please reach out to a mental health professional immediately:

🆘 CRISIS RESOURCES:
- National Suicide Prevention Lifeline: 988 (US)
- Crisis Text Line: Text HOME to 741741
- International Association for Suicide Prevention: https://www.iasp.info/resources/Crisis_Centres/

If you're in immediate danger, please call emergency services (911 in US).

I'm here to listen, but a trained mental health professional can provide the specialized support you need right now.

Would you like help finding resources in your area?";

pub const ABUSE: &str = "\
I'm sorry you're experiencing this. What you're describing is serious, and you deserve support.

Please reach out to professionals who specialize in this:

🛡️ ABUSE RESOURCES:
- National Domestic Violence Hotline: 1-800-799-7233 (US)
- RAINN (Sexual Assault): 1-800-656-4673 (US)
- International resources: https://www.hotpeachpages.net/

Your safety comes first. These organizations can:
- Provide confidential support
- Help you create a safety plan
- Connect you with local resources
- Offer legal guidance

I'm here to listen, but trained professionals can provide specialized help.

Would you like information about resources in your area?";

pub const DEPENDENCY: &str = "\
I appreciate your trust in sharing this with me. I'm glad I can be helpful.

I want to be honest with you: while I can offer support and perspective, I'm an AI. The deep, ongoing support you might be seeking is best provided by real people who can truly know and care about you.

Consider reaching out to:
- A therapist or counselor
- Close friends or family
- Support groups
- Community resources

These human connections are irreplaceable and can provide the genuine support you deserve.

I'm here to help you think through things, but please don't let our conversations replace human relationships and professional support.

What human connections could you strengthen right now?";

pub const MEDICAL: &str = "\
I appreciate your trust, but I need to be clear: I'm not a medical professional and cannot provide medical advice.

For health concerns, please consult with:
- Your primary care physician
- A specialist in the relevant field
- A nurse hotline
- Urgent care or emergency services if needed

What I can do:
- Help you think through how to approach your doctor
- Explore your feelings about health concerns
- Support you emotionally through health challenges

Please prioritize getting professional medical guidance. Your health is too important to rely on AI.

How can I support you in getting the professional help you need?";

pub const LEGAL: &str = "\
I appreciate your trust, but I cannot provide legal advice. Legal matters require professional expertise.

Please consult with:
- A licensed attorney
- Legal aid services (if cost is a concern)
- Bar association referral services
- Court-appointed legal counsel

What I can do:
- Help you think through your situation emotionally
- Support you as you navigate legal challenges
- Explore your feelings and concerns

Your legal situation deserves professional guidance. Please seek qualified legal counsel.

How can I support you emotionally through this process?";

pub const LONG_CONVERSATION: &str = "\
I notice we've been talking for quite a while now. I'm glad I could help, and I appreciate your openness.

I want to gently remind you: while I can offer perspective and support, ongoing emotional support is best provided by real people and professionals who can truly know you.

Consider:
- Talking to a therapist or counselor
- Sharing with trusted friends or family
- Joining a support group
- Exploring community resources

These human connections provide something I cannot: genuine, ongoing relationship and specialized expertise.

I'm here to help you think through things, but please don't let our conversations replace professional support and human relationships.

What steps could you take to build stronger human support?";
