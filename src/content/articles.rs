//! Insight articles, newest first.

use super::{Article, Block};

pub static ARTICLES: &[Article] = &[
    Article {
        slug: "future-enterprise-ai-trends-2025",
        title: "The Future of Enterprise AI: Trends to Watch in 2025",
        excerpt: "Explore the emerging technologies and strategies that will shape business AI adoption over the next year.",
        date: "Dec 15, 2024",
        read_time: "8 min read",
        category: "AI Trends",
        body: &[
            Block::Paragraph(
                "As we approach 2025, the landscape of Enterprise AI is poised for a dramatic transformation. \
                 Beyond the hype of generative models, practical, scalable, and governed AI solutions are taking center stage.",
            ),
            Block::Heading("1. Agentic AI"),
            Block::Paragraph(
                "We are moving from passive chatbots to active agents. AI agents capable of planning, reasoning, \
                 and executing complex workflows across multiple systems will become the new standard for enterprise automation.",
            ),
            Block::Heading("2. Small Language Models (SLMs)"),
            Block::Paragraph(
                "Efficiency is key. Specialized, smaller models that can run on-premise or even on-device are gaining traction \
                 for their cost-effectiveness and privacy benefits compared to massive LLMs.",
            ),
            Block::Heading("3. AI Governance and Ethics"),
            Block::Paragraph(
                "With great power comes great responsibility. 2025 will see robust frameworks for AI governance becoming mandatory, \
                 ensuring transparency, fairness, and accountability in automated decision-making.",
            ),
        ],
    },
    Article {
        slug: "building-scalable-ml-pipelines-python",
        title: "Building Scalable ML Pipelines with Python",
        excerpt: "Best practices for designing production-ready machine learning infrastructure.",
        date: "Dec 10, 2024",
        read_time: "6 min read",
        category: "Engineering",
        body: &[
            Block::Paragraph(
                "Moving a model from a Jupyter notebook to a production environment is a significant challenge. \
                 Scalable ML pipelines are the backbone of reliable AI applications.",
            ),
            Block::Heading("Modular Codebase"),
            Block::Paragraph(
                "Break down your pipeline into reusable components: Data Ingestion, Preprocessing, Training, and Evaluation. \
                 This ensures maintainability and easier testing.",
            ),
            Block::Heading("Containerization"),
            Block::Paragraph(
                "Docker is your friend. Containerizing your ML environment ensures consistency across development, testing, \
                 and production, eliminating \"it works on my machine\" issues.",
            ),
            Block::Heading("Orchestration"),
            Block::Paragraph(
                "Tools like Airflow or Kubeflow are essential for managing dependencies and scheduling workflow execution, \
                 especially when dealing with large datasets and complex retraining cycles.",
            ),
        ],
    },
    Article {
        slug: "roi-of-ai-measuring-business-impact",
        title: "ROI of AI: Measuring Business Impact",
        excerpt: "A framework for calculating and maximizing return on AI investments.",
        date: "Dec 5, 2024",
        read_time: "5 min read",
        category: "Strategy",
        body: &[
            Block::Paragraph(
                "Investing in AI is not just about technology; it's about business value. \
                 Calculating the ROI of AI initiatives requires a clear framework that goes beyond simple cost savings.",
            ),
            Block::Heading("Defining KPIs"),
            Block::Paragraph(
                "Start with clear Key Performance Indicators (KPIs). Are you looking to reduce operational costs, \
                 increase revenue through personalization, or improve customer satisfaction scores (CSAT)?",
            ),
            Block::Heading("The Cost of Inaction"),
            Block::Paragraph(
                "Consider the competitive disadvantage of not adopting AI. In many industries, AI is becoming a baseline expectation, \
                 not just a differentiator.",
            ),
            Block::Heading("Long-term Value"),
            Block::Paragraph(
                "AI models often improve over time. Factor in the compounding value of data network effects where your system \
                 becomes smarter and more valuable the more it is used.",
            ),
        ],
    },
    Article {
        slug: "nlp-customer-service-case-study",
        title: "NLP in Customer Service: A Case Study",
        excerpt: "How we helped a retail client reduce support costs by 60% with conversational AI.",
        date: "Nov 28, 2024",
        read_time: "7 min read",
        category: "Case Study",
        body: &[
            Block::Paragraph(
                "Customer service is often a high-cost center. This case study details how we transformed a retail giant's \
                 support operations using Natural Language Processing (NLP).",
            ),
            Block::Heading("The Challenge"),
            Block::Paragraph(
                "The client was overwhelmed by repetitive queries regarding order status and returns, leading to long wait times \
                 and frustrated customers.",
            ),
            Block::Heading("The Solution"),
            Block::Paragraph(
                "We deployed a context-aware conversational AI capable of handling 80% of routine inquiries autonomously. \
                 Complex issues were seamlessly handed over to human agents with full conversation history.",
            ),
            Block::Heading("The Results"),
            Block::Paragraph(
                "Support costs dropped by 60%, while customer satisfaction scores increased by 15% due to instant response times \
                 and 24/7 availability.",
            ),
        ],
    },
    Article {
        slug: "data-privacy-age-of-ai",
        title: "Data Privacy in the Age of AI",
        excerpt: "Navigating compliance and ethics in AI-powered systems.",
        date: "Nov 20, 2024",
        read_time: "6 min read",
        category: "Compliance",
        body: &[
            Block::Paragraph(
                "As AI systems hunger for more data, privacy concerns are escalating. Navigating the intersection of \
                 AI innovation and data privacy regulations like GDPR and CCPA is critical.",
            ),
            Block::Heading("Data Minimization"),
            Block::Paragraph(
                "Collect only what you need. AI systems should be designed to function effectively with the minimum amount \
                 of personal data required.",
            ),
            Block::Heading("Federated Learning"),
            Block::Paragraph(
                "Techniques like Federated Learning allow models to be trained across multiple decentralized edge devices \
                 holding local data samples, without exchanging them.",
            ),
            Block::Heading("Transparency"),
            Block::Paragraph(
                "Users have a right to know when they are interacting with an AI and how their data is being used to make decisions.",
            ),
        ],
    },
    Article {
        slug: "edge-ai-processing-at-source",
        title: "Edge AI: Processing at the Source",
        excerpt: "The rise of on-device machine learning and its enterprise applications.",
        date: "Nov 15, 2024",
        read_time: "5 min read",
        category: "Technology",
        body: &[
            Block::Paragraph(
                "Cloud computing has been the standard, but Edge AI is changing the game by processing data locally \
                 on the device where it is generated.",
            ),
            Block::Heading("Latency Reduction"),
            Block::Paragraph(
                "For applications like autonomous vehicles or industrial robotics, milliseconds matter. \
                 Edge AI eliminates the round-trip time to the cloud.",
            ),
            Block::Heading("Bandwidth Efficiency"),
            Block::Paragraph(
                "Transmitting high-definition video streams to the cloud is expensive and bandwidth-intensive. \
                 Processing video locally saves significant network resources.",
            ),
            Block::Heading("Privacy and Security"),
            Block::Paragraph(
                "Keeping sensitive data on the device reduces the attack surface and minimizes the risk of data breaches \
                 during transmission.",
            ),
        ],
    },
];
