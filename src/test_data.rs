#[cfg(test)]
pub const EXPORT_DATA: &str = r##"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0"
	xmlns:excerpt="http://wordpress.org/export/1.2/excerpt/"
	xmlns:content="http://purl.org/rss/1.0/modules/content/"
	xmlns:wfw="http://wellformedweb.org/CommentAPI/"
	xmlns:dc="http://purl.org/dc/elements/1.1/"
	xmlns:wp="http://wordpress.org/export/1.2/"
>
<channel>
	<title>Coffee Notes</title>
	<link>https://coffee.example.com</link>
	<description>Writing about coffee &amp; code</description>
	<pubDate>Wed, 03 Jan 2024 12:00:00 +0000</pubDate>
	<language>en-US</language>
	<wp:wxr_version>1.2</wp:wxr_version>
	<wp:base_site_url>https://coffee.example.com</wp:base_site_url>
	<wp:base_blog_url>https://coffee.example.com</wp:base_blog_url>

	<wp:author><wp:author_id>1</wp:author_id><wp:author_login><![CDATA[jdoe]]></wp:author_login><wp:author_email><![CDATA[jane@example.com]]></wp:author_email><wp:author_display_name><![CDATA[Jane Doe]]></wp:author_display_name><wp:author_first_name><![CDATA[Jane]]></wp:author_first_name><wp:author_last_name><![CDATA[Doe]]></wp:author_last_name></wp:author>
	<wp:author><wp:author_id>2</wp:author_id><wp:author_login><![CDATA[msmith]]></wp:author_login><wp:author_email><![CDATA[mark@example.com]]></wp:author_email><wp:author_display_name><![CDATA[Mark Smith]]></wp:author_display_name><wp:author_first_name><![CDATA[Mark]]></wp:author_first_name><wp:author_last_name><![CDATA[Smith]]></wp:author_last_name></wp:author>

	<wp:category><wp:term_id>1</wp:term_id><wp:category_nicename><![CDATA[news]]></wp:category_nicename><wp:category_parent><![CDATA[]]></wp:category_parent><wp:cat_name><![CDATA[News]]></wp:cat_name></wp:category>
	<wp:category><wp:term_id>2</wp:term_id><wp:category_nicename><![CDATA[releases]]></wp:category_nicename><wp:category_parent><![CDATA[news]]></wp:category_parent><wp:cat_name><![CDATA[Releases]]></wp:cat_name></wp:category>
	<wp:tag><wp:term_id>3</wp:term_id><wp:tag_slug><![CDATA[rust]]></wp:tag_slug><wp:tag_name><![CDATA[Rust]]></wp:tag_name></wp:tag>
	<wp:tag><wp:term_id>4</wp:term_id><wp:tag_slug><![CDATA[coffee]]></wp:tag_slug><wp:tag_name><![CDATA[Coffee]]></wp:tag_name></wp:tag>
	<wp:term><wp:term_id>5</wp:term_id><wp:term_taxonomy><![CDATA[nav_menu]]></wp:term_taxonomy><wp:term_slug><![CDATA[main]]></wp:term_slug><wp:term_parent><![CDATA[]]></wp:term_parent><wp:term_name><![CDATA[Main]]></wp:term_name></wp:term>

	<generator>https://wordpress.org/?v=6.4.2</generator>

	<item>
		<title>Hello World</title>
		<link>https://coffee.example.com/2024/01/hello-world/</link>
		<pubDate>Tue, 02 Jan 2024 10:00:00 +0000</pubDate>
		<dc:creator><![CDATA[jdoe]]></dc:creator>
		<guid isPermaLink="false">https://coffee.example.com/?p=1</guid>
		<description></description>
		<content:encoded><![CDATA[<p>Hello <!--more--> World</p>
<p><img src="https://coffee.example.com/wp-content/uploads/2024/01/beans.jpg" alt="Beans" /></p>]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>1</wp:post_id>
		<wp:post_date><![CDATA[2024-01-02 10:00:00]]></wp:post_date>
		<wp:post_date_gmt><![CDATA[2024-01-02 10:00:00]]></wp:post_date_gmt>
		<wp:comment_status><![CDATA[open]]></wp:comment_status>
		<wp:ping_status><![CDATA[open]]></wp:ping_status>
		<wp:post_name><![CDATA[hello-world]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:menu_order>0</wp:menu_order>
		<wp:post_type><![CDATA[post]]></wp:post_type>
		<wp:post_password><![CDATA[]]></wp:post_password>
		<wp:is_sticky>0</wp:is_sticky>
		<category domain="category" nicename="news"><![CDATA[News]]></category>
		<category domain="post_tag" nicename="rust"><![CDATA[Rust]]></category>
		<wp:postmeta><wp:meta_key><![CDATA[_edit_last]]></wp:meta_key><wp:meta_value><![CDATA[1]]></wp:meta_value></wp:postmeta>
	</item>
	<item>
		<title>Draft thoughts</title>
		<link>https://coffee.example.com/?p=2</link>
		<pubDate>not a date</pubDate>
		<dc:creator><![CDATA[MSmith]]></dc:creator>
		<guid isPermaLink="false">https://coffee.example.com/?p=2</guid>
		<description></description>
		<content:encoded><![CDATA[<h2>Work in progress</h2><p>Some <strong>bold</strong> ideas.</p>]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>2</wp:post_id>
		<wp:post_date><![CDATA[2023-11-05 08:30:00]]></wp:post_date>
		<wp:post_date_gmt><![CDATA[0000-00-00 00:00:00]]></wp:post_date_gmt>
		<wp:post_name><![CDATA[draft-thoughts]]></wp:post_name>
		<wp:status><![CDATA[draft]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:menu_order>0</wp:menu_order>
		<wp:post_type><![CDATA[post]]></wp:post_type>
		<wp:is_sticky>0</wp:is_sticky>
	</item>
	<item>
		<title>About</title>
		<link>https://coffee.example.com/about/</link>
		<pubDate>Mon, 01 May 2023 09:15:00 +0000</pubDate>
		<dc:creator><![CDATA[ghost]]></dc:creator>
		<guid isPermaLink="false">https://coffee.example.com/?page_id=3</guid>
		<description>A page about this blog</description>
		<content:encoded><![CDATA[<p>We write about <em>coffee</em>.</p>]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>3</wp:post_id>
		<wp:post_date><![CDATA[2023-05-01 09:15:00]]></wp:post_date>
		<wp:post_name><![CDATA[about]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:menu_order>0</wp:menu_order>
		<wp:post_type><![CDATA[page]]></wp:post_type>
		<wp:is_sticky>0</wp:is_sticky>
	</item>
	<item>
		<title>beans</title>
		<link>https://coffee.example.com/2024/01/hello-world/beans/</link>
		<pubDate>Tue, 02 Jan 2024 09:55:00 +0000</pubDate>
		<dc:creator><![CDATA[jdoe]]></dc:creator>
		<guid isPermaLink="false">https://coffee.example.com/wp-content/uploads/2024/01/beans.jpg</guid>
		<description></description>
		<content:encoded><![CDATA[]]></content:encoded>
		<excerpt:encoded><![CDATA[The "best" beans]]></excerpt:encoded>
		<wp:post_id>4</wp:post_id>
		<wp:post_date><![CDATA[2024-01-02 09:55:00]]></wp:post_date>
		<wp:post_name><![CDATA[beans]]></wp:post_name>
		<wp:status><![CDATA[inherit]]></wp:status>
		<wp:post_parent>1</wp:post_parent>
		<wp:menu_order>0</wp:menu_order>
		<wp:post_type><![CDATA[attachment]]></wp:post_type>
		<wp:is_sticky>0</wp:is_sticky>
		<wp:attachment_url><![CDATA[https://coffee.example.com/wp-content/uploads/2024/01/beans.jpg]]></wp:attachment_url>
	</item>
	<item>
		<title>README</title>
		<link>https://coffee.example.com/about/readme/</link>
		<pubDate>Mon, 01 May 2023 09:10:00 +0000</pubDate>
		<dc:creator><![CDATA[jdoe]]></dc:creator>
		<guid isPermaLink="false">https://coffee.example.com/wp-content/uploads/2023/05/README</guid>
		<description></description>
		<content:encoded><![CDATA[]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>5</wp:post_id>
		<wp:post_date><![CDATA[2023-05-01 09:10:00]]></wp:post_date>
		<wp:post_name><![CDATA[readme]]></wp:post_name>
		<wp:status><![CDATA[inherit]]></wp:status>
		<wp:post_parent>3</wp:post_parent>
		<wp:menu_order>0</wp:menu_order>
		<wp:post_type><![CDATA[attachment]]></wp:post_type>
		<wp:is_sticky>0</wp:is_sticky>
	</item>
	<item>
		<title>Home</title>
		<link>https://coffee.example.com/home/</link>
		<pubDate>Mon, 01 May 2023 09:00:00 +0000</pubDate>
		<dc:creator><![CDATA[jdoe]]></dc:creator>
		<guid isPermaLink="false">https://coffee.example.com/?p=6</guid>
		<description></description>
		<content:encoded><![CDATA[]]></content:encoded>
		<excerpt:encoded><![CDATA[]]></excerpt:encoded>
		<wp:post_id>6</wp:post_id>
		<wp:post_date><![CDATA[2023-05-01 09:00:00]]></wp:post_date>
		<wp:post_name><![CDATA[home]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_parent>0</wp:post_parent>
		<wp:menu_order>1</wp:menu_order>
		<wp:post_type><![CDATA[nav_menu_item]]></wp:post_type>
		<wp:is_sticky>0</wp:is_sticky>
	</item>
</channel>
</rss>
"##;

/// Smallest export that exercises author, category and read-more handling
#[cfg(test)]
pub const MINIMAL_EXPORT: &str = r##"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0">
<channel>
	<title>Minimal</title>
	<link>http://example.org</link>
	<wp:author><wp:author_id>7</wp:author_id><wp:author_login><![CDATA[jdoe]]></wp:author_login><wp:author_display_name><![CDATA[jdoe]]></wp:author_display_name></wp:author>
	<wp:category><wp:term_id>1</wp:term_id><wp:category_nicename><![CDATA[news]]></wp:category_nicename><wp:cat_name><![CDATA[News]]></wp:cat_name></wp:category>
	<item>
		<title>Hello</title>
		<link>http://example.org/hello/</link>
		<pubDate>Fri, 15 Mar 2019 08:00:00 +0000</pubDate>
		<dc:creator><![CDATA[jdoe]]></dc:creator>
		<content:encoded><![CDATA[<p>Hello <!--more--> World</p>]]></content:encoded>
		<wp:post_id>1</wp:post_id>
		<wp:post_date><![CDATA[2019-03-15 08:00:00]]></wp:post_date>
		<wp:post_name><![CDATA[hello]]></wp:post_name>
		<wp:status><![CDATA[publish]]></wp:status>
		<wp:post_type><![CDATA[post]]></wp:post_type>
		<category domain="category" nicename="news"><![CDATA[News]]></category>
	</item>
</channel>
</rss>
"##;
