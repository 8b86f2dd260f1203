//! English translation table. This is the default locale: every key the
//! application resolves should be present here.

pub(super) const TABLE: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About Us"),
    ("blog", "Blogs"),
    ("dashboard", "Dashboard"),
    ("login", "Login"),
    ("signup", "Sign Up"),
    ("resources", "Resources"),
    ("findTeacher", "Find a Teacher Guide"),
    ("becomeTeacher", "Become a Teacher Guide"),
    ("logout", "Logout"),
    ("contact", "Contact"),
    ("welcomeBack", "Welcome Back!"),
    ("continueJourney", "Sign in to continue your learning journey with LesonPaw"),
    ("email", "Email"),
    ("password", "Password"),
    ("forgotPassword", "Forgot password?"),
    ("enterEmail", "Enter your email"),
    ("enterPassword", "Enter your password"),
    ("validate", "Validate"),
    ("captchaText", "Enter the captcha text"),
    ("newToSite", "New to LesonPaw?"),
    ("createAccount", "Create an account"),
    ("successLogin", "User Login Successful!"),
    ("failedLogin", "Login Failed"),
    ("tryAgain", "Try Again"),
    ("quickLinks", "Quick Links"),
    ("subjects", "Subjects"),
    ("contactUs", "Contact Us"),
    ("teacherGuide", "Teacher Guide"),
    ("studentGuide", "Student Guide"),
    ("connectingStudents", "Connecting students with professional teachers across Haiti since 2024"),
    ("allRightsReserved", "© 2025 LesonPaw. All rights reserved."),
    ("privacyPolicy", "Privacy Policy"),
    ("termsOfService", "Terms of Service"),
    ("cookies", "Cookies"),
    ("transformingEducation", "Transforming Education"),
    ("inHaiti", "in Haiti"),
    ("buildingBridges", "Unlock your potential with expert educators who inspire. Join thousands of successful students on Haiti's premier learning platform. Your journey to excellence starts here!"),
    ("getStarted", "Get Started Now"),
    ("ourPurpose", "Our Purpose"),
    ("empoweringEducation", "Empowering education through innovation and accessibility"),
    ("forStudents", "For Students"),
    ("forTutors", "For Tutors"),
    ("accessToTutors", "Access to qualified tutors across multiple subjects"),
    ("flexibleScheduling", "Flexible scheduling to fit your needs"),
    ("personalizedLearning", "Personalized learning experience"),
    ("progressTracking", "Progress tracking and performance analytics"),
    ("buildProfile", "Build your teaching profile and reputation"),
    ("setSchedule", "Set your own schedule and rates"),
    ("teachingResources", "Access to teaching resources and materials"),
    ("securePayment", "Secure payment processing"),
    ("trustAndSecurity", "Trust & Security"),
    ("yourSafety", "Your safety and success are our top priorities"),
    ("verifiedTutors", "Verified Tutors"),
    ("support247", "24/7 Support"),
    ("satisfactionGuarantee", "Satisfaction Guarantee"),
    ("tutorsVerified", "All our tutors undergo thorough background checks and verification processes"),
    ("supportAvailable", "Our dedicated support team is always available to assist you"),
    ("qualityEducation", "Quality Education"),
    ("mathematics", "Mathematics"),
    ("sciences", "Sciences"),
    ("languages", "Languages"),
    ("history", "History"),
    ("computerScience", "Computer Science"),
    ("artsMusic", "Arts & Music"),
    ("studentsHelped", "Students Helped"),
    ("successfulLearners", "Successful learners who achieved their goals"),
    ("expertTutors", "Expert Tutors"),
    ("qualifiedEducators", "Qualified educators ready to help"),
    ("subjectsCovered", "Subjects Covered"),
    ("diverseTopics", "Diverse range of academic topics"),
    ("successRate", "Success Rate"),
    ("satisfactionRate", "Student satisfaction rate"),
    ("ourValues", "Our Core Values"),
    ("principlesGuide", "Principles that guide our mission to transform education"),
    ("integrity", "Integrity"),
    ("integrityDesc", "We maintain the highest standards of professional conduct"),
    ("innovation", "Innovative Learning"),
    ("innovationDesc", "Leveraging technology to make education more accessible and engaging for everyone."),
    ("growth", "Growth"),
    ("growthDesc", "Fostering continuous learning and development"),
    ("excellence", "Excellence"),
    ("excellenceDesc", "Striving for the best in everything we do"),
    ("readyToTransform", "Ready to Transform Your Learning Journey?"),
    ("joinThousands", "Join thousands of students and tutors who are already part of our growing community"),
    ("howItWorks", "How It Works"),
    ("searchTeacher", "Search"),
    ("searchTeacherDesc", "Find the perfect teacher based on your needs and location in Haiti."),
    ("connect", "Connect"),
    ("connectDesc", "Schedule lessons at times that work for your availability."),
    ("learn", "Learn"),
    ("learnDesc", "Receive personalized instruction and achieve your goals."),
    ("platformDesc", "Our platform makes it easy to connect students with qualified teachers in Haiti"),
    ("readyToStart", "Ready to start your learning journey or offer your teaching services?"),
    ("whyChooseUs", "Why Choose LessonPaw"),
    ("committedToEducation", "We're committed to making quality education accessible throughout Haiti"),
    ("verifiedTeachers", "Verified Teachers"),
    ("verifiedTeachersDesc", "All teachers are verified for credentials and expertise in their subjects."),
    ("studentCount", "5,000+ Students"),
    ("studentCountDesc", "Join thousands of students who have found their perfect teacher match."),
    ("qualityGuarantee", "Quality Guarantee"),
    ("qualityGuaranteeDesc", "We ensure high-quality teaching or offer a replacement at no extra cost."),
    ("safePayments", "Safe Payments"),
    ("safePaymentsDesc", "Secure payment options including mobile money popular in Haiti."),
    ("meetExperts", "Meet Our Expert Tutors"),
    ("teacherDesc", "Learn from experienced educators who are passionate about helping students succeed"),
    ("successStories", "Our Success Stories"),
    ("successStoriesDesc", "Discover how our platform has transformed learning experiences and helped students achieve their goals"),
    ("viewAllStories", "View All Success Stories"),
    ("noStories", "No success stories to display yet."),
    ("support", "Support"),
    ("supportDesc", "Need help? Our support team is here for you"),
    ("contactSupport", "Contact Support"),
    ("supportEmail", "Email Support"),
    ("supportPhone", "Phone Support"),
    ("supportChat", "Live Chat"),
    ("supportHours", "Support Hours"),
    ("supportAvailability", "Support Available 24/7"),
    ("supportResponse", "Typical response time: 2 hours"),
    ("supportTicket", "Create Support Ticket"),
    ("supportFAQ", "FAQ"),
    ("supportHelp", "Need Support?"),
    ("supportTeam", "We are here to Help"),
    ("pleaseEnterMessage", "Please enter a message"),
    ("sent", "Sent"),
    ("messageSent", "Message sent"),
    ("error", "Error"),
    ("failedToSendMessage", "Failed to send message"),
    ("quickResponse", "Quick Response"),
    ("writeMessage", "Write your message here..."),
    ("sendMessage", "Send Message"),
    ("signInToMessage", "Sign in to Send a Message"),
    ("pleaseLoginMessage", "Please log in to your account to send us a message."),
    ("whatIsLesonPaw", "What is"),
    ("qualityEducationDesc", "We provide access to high-quality education through our network of verified professional teachers."),
    ("connecting", "Building Connections"),
    ("connectingDesc", "Creating meaningful connections between students and teachers to foster a collaborative learning environment."),
    ("lesonPawMission", "Our mission is to transform education in Haiti by making quality learning accessible to all students through our innovative platform."),
    ("getInTouch", "Get in Touch with"),
    ("contactSubtitle", "We're here to help! Send us a message and we'll respond within 24 business hours."),
    ("fullName", "Full Name"),
    ("nameRequired", "Name is required"),
    ("emailRequired", "Email is required"),
    ("invalidEmail", "Invalid email address"),
    ("phone", "Phone Number"),
    ("optional", "Optional"),
    ("subject", "Subject"),
    ("subjectRequired", "Subject is required"),
    ("message", "Message"),
    ("messageRequired", "Message is required"),
    ("messageMinLength", "Message must be at least 20 characters"),
    ("attachments", "Attachments"),
    ("fileUploadInfo", "Max file size: 5MB. Supported formats: PDF, DOC, DOCX, JPG, PNG"),
    ("verifyCaptcha", "Verify Captcha"),
    ("enterCaptcha", "Enter captcha text"),
    ("captchaValidated", "Captcha Validated!"),
    ("captchaRequired", "Captcha Required"),
    ("pleaseVerifyCaptcha", "Please verify the captcha before submitting"),
    ("sending", "Sending..."),
    ("responseTime", "We will get back to you within 24 business hours."),
    ("submissionFailed", "Submission Failed"),
    ("tryAlternativeContact", "Please try again later or use alternative contact methods."),
    ("businessHours", "Business Hours"),
    ("mondayFriday", "Monday - Friday"),
    ("saturday", "Saturday"),
    ("sunday", "Sunday"),
    ("closed", "Closed"),
    ("timeZone", "All times are in Eastern Time (ET)"),
    ("contactInfo", "Contact Information"),
    ("address", "Address"),
    ("connectWithUs", "Connect With Us"),
    ("ourLocation", "Our Location"),
    ("getDirections", "Get Directions"),
    ("manageProfile", "Manage Profile"),
    ("myBookings", "My Bookings"),
    ("joinAsTeacher", "Join as Teacher"),
    ("postJob", "Post Job"),
    ("availableJobs", "Available Jobs"),
    ("manageServices", "Manage Services"),
    ("manageUsers", "Manage Users"),
    ("allTutors", "All Tutors"),
    ("showMessages", "Show Messages"),
    ("addTutor", "Add Tutor"),
    ("applications", "Applications"),
    ("payments", "Payments"),
    ("analytics", "Analytics"),
    ("students", "Students"),
    ("allJobs", "All Jobs"),
    ("allServices", "All Services"),
    ("story", "Story"),
    ("manageStory", "Manage Story"),
    ("addBlog", "Add Blog"),
    ("editBlog", "Edit Blog"),
    ("menu", "Menu"),
    ("invalidCaptcha", "Invalid Captcha"),
    ("pleaseTryAgain", "Please try again"),
    ("ok", "Ok"),
    ("termsRequired", "Terms & Conditions Required"),
    ("acceptTerms", "Please accept the terms and conditions to continue"),
    ("loggedOut", "Logged Out"),
    ("loggedOutText", "You have successfully logged out."),
    ("logoutFailed", "Logout Failed"),
    ("logoutFailedText", "Something went wrong while logging out."),
    ("passwordRequired", "Password is required"),
    ("passwordMinLength", "Password must be at least 6 characters"),
    ("passwordPattern", "Password must include uppercase, lowercase, number and special character"),
    ("imageUploadFailed", "Image Upload Failed"),
    ("imageUploadFailedText", "Please try again or use a photo URL instead."),
    ("userCreated", "User Created Successfully"),
    ("signupFailed", "Sign Up Failed"),
    ("loginToBook", "Please log in to book a tutor."),
    ("alreadyBooked", "You have already booked this tutor."),
    ("bookingSuccess", "Tutor booked successfully!"),
    ("bookingFailed", "Failed to book tutor."),
    ("tutorNotFound", "Tutor not found"),
    ("failedToLoadTutor", "Failed to load tutor details"),
    ("paymentSuccess", "Payment Successful!"),
    ("bookingConfirmed", "Your booking has been confirmed."),
    ("paymentUnexpectedError", "An unexpected error occurred. Please try again."),
    ("paymentNotReady", "Payment is not ready yet. Please wait a moment."),
    ("paymentNotCompleted", "Payment was not completed. Please try again."),
    ("paymentAlreadyCompleted", "This booking has already been paid."),
    ("success", "Success"),
    ("jobPosted", "Job posted successfully!"),
    ("jobPostFailed", "Failed to post job"),
    ("paymentRequired", "Payment Required"),
    ("jobFeeNotice", "You have posted 3 jobs. Please pay a $10 fee to continue."),
    ("payFee", "Pay $10"),
    ("messageMarkedRead", "Message Marked as Read"),
    ("messageDeleted", "Message Deleted"),
    ("deleteMessageConfirm", "Delete Message?"),
    ("failedToLoadMessages", "Failed to load messages"),
    ("failedToLoadBlogs", "Failed to load blogs. Please try again later."),
];
